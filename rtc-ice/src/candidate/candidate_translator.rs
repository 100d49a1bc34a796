/// Maps candidate components to channel names and back.
///
/// Used while parsing and writing legacy channel-name based candidate
/// signalling. Implemented by the signalling layer; lookups of unknown keys
/// return `None`.
pub trait CandidateTranslator {
    /// Returns the channel name of `component`, if known.
    fn channel_name_from_component(&self, component: i32) -> Option<String>;

    /// Returns the component of `channel_name`, if known.
    fn component_from_channel_name(&self, channel_name: &str) -> Option<i32>;
}
