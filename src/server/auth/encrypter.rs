use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tokio::task::JoinError;

const SALT_BYTES: usize = 16;
const DEFAULT_ITERATIONS: u32 = 10_000;

/// Salted, iterated SHA-256 password hashing for personnel accounts.
///
/// The `*_blocking` variants run on tokio's blocking thread pool.
#[derive(Debug, Clone, Copy)]
pub struct Encrypter {
    iterations: u32,
}

impl Default for Encrypter {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl Encrypter {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    /// Generates a random hex-encoded salt.
    pub fn generate_salt(&self) -> String {
        let salt: [u8; SALT_BYTES] = rand::random();
        hex::encode(salt)
    }

    /// Hashes `password` with `salt`, returning the hex-encoded digest.
    pub fn hash(&self, password: &str, salt: &str) -> String {
        let mut digest = Sha256::new()
            .chain_update(salt.as_bytes())
            .chain_update(password.as_bytes())
            .finalize();

        for _ in 1..self.iterations {
            digest = Sha256::new()
                .chain_update(salt.as_bytes())
                .chain_update(digest)
                .finalize();
        }

        hex::encode(digest)
    }

    /// Checks `password` against a stored hash in constant time.
    pub fn verify(&self, password: &str, salt: &str, expected_hash: &str) -> bool {
        let actual = self.hash(password, salt);

        actual.as_bytes().ct_eq(expected_hash.as_bytes()).into()
    }

    /// [`Encrypter::hash`] on the blocking thread pool.
    pub async fn hash_blocking(&self, password: &str, salt: &str) -> Result<String, JoinError> {
        let encrypter = *self;
        let (password, salt) = (password.to_string(), salt.to_string());

        tokio::task::spawn_blocking(move || encrypter.hash(&password, &salt)).await
    }

    /// [`Encrypter::verify`] on the blocking thread pool.
    pub async fn verify_blocking(
        &self,
        password: &str,
        salt: &str,
        expected_hash: &str,
    ) -> Result<bool, JoinError> {
        let encrypter = *self;
        let (password, salt, expected_hash) = (
            password.to_string(),
            salt.to_string(),
            expected_hash.to_string(),
        );

        tokio::task::spawn_blocking(move || encrypter.verify(&password, &salt, &expected_hash))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let encrypter = Encrypter::new(10);
        let salt = encrypter.generate_salt();
        let hash = encrypter.hash("correct horse", &salt);

        assert_eq!(hash.len(), 64);
        assert!(encrypter.verify("correct horse", &salt, &hash));
        assert!(!encrypter.verify("battery staple", &salt, &hash));
    }

    /// Expected: false for stored hashes of the wrong length, including empty
    #[test]
    fn rejects_hash_of_different_length() {
        let encrypter = Encrypter::new(10);
        let hash = encrypter.hash("password", "salt");

        assert!(!encrypter.verify("password", "salt", ""));
        assert!(!encrypter.verify("password", "salt", &hash[..32]));
        assert!(!encrypter.verify("password", "salt", &format!("{}00", hash)));
    }

    #[test]
    fn salt_changes_hash() {
        let encrypter = Encrypter::new(10);
        let first = encrypter.generate_salt();
        let second = encrypter.generate_salt();

        assert_eq!(first.len(), SALT_BYTES * 2);
        assert!(hex::decode(&first).is_ok());
        assert_ne!(first, second);
        assert_ne!(
            encrypter.hash("password", &first),
            encrypter.hash("password", &second)
        );
    }

    #[test]
    fn hashing_is_deterministic() {
        let encrypter = Encrypter::default();

        assert_eq!(
            encrypter.hash("password", "salt"),
            encrypter.hash("password", "salt")
        );
    }

    /// Expected: blocking-pool variants agree with the synchronous ones
    #[tokio::test]
    async fn blocking_variants_match() -> Result<(), JoinError> {
        let encrypter = Encrypter::new(10);
        let hash = encrypter.hash_blocking("password", "salt").await?;

        assert_eq!(hash, encrypter.hash("password", "salt"));
        assert!(encrypter.verify_blocking("password", "salt", &hash).await?);
        assert!(!encrypter.verify_blocking("other", "salt", &hash).await?);

        Ok(())
    }
}
