use shared::util::generate_crypto_random_string;


/// ice-char = ALPHA / DIGIT / "+" / "/"
/// <https://tools.ietf.org/html/rfc5245#section-15.1>
const RUNES_CANDIDATE_ID_FOUNDATION: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789/+";

/// Length of the identifier assigned to every new `Candidate`.
pub const LEN_CANDIDATE_ID: usize = 8;

/// Source of candidate identifiers.
///
/// `Candidate` construction never takes an id from the caller; it asks an
/// `IdGenerator` instead, which lets tests plug in deterministic ids.
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

/// Produces `LEN_CANDIDATE_ID` random ice-chars per id.
#[derive(Default, Debug, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate_id(&self) -> String {
        generate_crypto_random_string(LEN_CANDIDATE_ID, RUNES_CANDIDATE_ID_FOUNDATION)
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> String,
{
    fn generate_id(&self) -> String {
        self()
    }
}
