//! Password hashes in the `method$salt$hash` layout the web application's
//! `check_password_hash` reads, e.g. `pbkdf2:sha256:1000000$<salt>$<hex>`.

use pbkdf2::pbkdf2_hmac;
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};
use sha2::Sha256;

pub const PBKDF2_ITERATIONS: u32 = 1_000_000;
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Salted PBKDF2-HMAC-SHA256 with the default iteration count.
pub fn hash_password(plain: &str) -> String {
    let salt: String = OsRng
        .sample_iter(&Alphanumeric)
        .take(SALT_LEN)
        .map(char::from)
        .collect();
    hash_with(plain, &salt, PBKDF2_ITERATIONS)
}

fn hash_with(plain: &str, salt: &str, iterations: u32) -> String {
    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(plain.as_bytes(), salt.as_bytes(), iterations, &mut key);
    format!("pbkdf2:sha256:{iterations}${salt}${}", hex::encode(key))
}

/// Mirrors the web application's check; anything unparsable is a mismatch.
#[cfg(test)]
pub(crate) fn verify_password(plain: &str, stored: &str) -> bool {
    let mut parts = stored.splitn(3, '$');
    let (Some(method), Some(salt), Some(expected)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    let iterations = match method.split(':').collect::<Vec<_>>()[..] {
        ["pbkdf2", "sha256", n] => n.parse::<u32>().ok(),
        ["pbkdf2", "sha256"] | ["pbkdf2"] => Some(PBKDF2_ITERATIONS),
        _ => None,
    };
    match iterations {
        Some(n) if n > 0 => {
            let mut key = [0u8; KEY_LEN];
            pbkdf2_hmac::<Sha256>(plain.as_bytes(), salt.as_bytes(), n, &mut key);
            hex::encode(key) == expected
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Produced by werkzeug 3.1.8:
    // generate_password_hash("p1", method="pbkdf2:sha256:1000")
    const WERKZEUG_P1: &str = "pbkdf2:sha256:1000$iZ2hjNRgpiYYjJrm$\
        df5d8c31b24e0856511b04deb3f47f48d5f921a9d08be738229b86de9cd92e77";

    #[test]
    fn matches_werkzeug_vector() {
        assert_eq!(hash_with("p1", "iZ2hjNRgpiYYjJrm", 1000), WERKZEUG_P1);
        assert!(verify_password("p1", WERKZEUG_P1));
        assert!(!verify_password("p2", WERKZEUG_P1));
    }

    #[test]
    fn hash_layout_matches_werkzeug() {
        let hash = hash_password("p1");
        let parts: Vec<&str> = hash.split('$').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "pbkdf2:sha256:1000000");
        assert_eq!(parts[1].len(), SALT_LEN);
        assert!(parts[1].chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(parts[2].len(), KEY_LEN * 2);
        assert_ne!(hash, "p1");
        assert!(verify_password("p1", &hash));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let a = hash_with("password", "aaaaaaaaaaaaaaaa", 1000);
        let b = hash_with("password", "bbbbbbbbbbbbbbbb", 1000);
        assert_ne!(a, b);
        assert_ne!(hash_password("password"), hash_password("password"));
    }

    #[test]
    fn unparsable_hashes_never_verify() {
        assert!(!verify_password("p1", "not-a-hash"));
        assert!(!verify_password("p1", "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA"));
        assert!(!verify_password("p1", "scrypt:32768:8:1$salt$abcd"));
        assert!(!verify_password("p1", "pbkdf2:sha256:0$salt$abcd"));
    }
}
