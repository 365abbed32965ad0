/// Compares a presented secret with the stored one.
///
/// Secrets are stored and compared as plaintext. This is a known weakness kept
/// for compatibility with existing data; every credential check in the crate
/// goes through this function so a hashed scheme can replace it in one place.
pub fn secret_matches(stored: Option<&str>, presented: &str) -> bool {
    match stored {
        Some(stored) => stored == presented,
        None => false,
    }
}
