use rand::Rng;

const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const REFERENCE_LEN: usize = 8;

/// Generate a human-readable booking reference, e.g. `REF-K3QD81ZP`.
pub fn booking_reference() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..REFERENCE_LEN)
        .map(|_| REFERENCE_CHARSET[rng.gen_range(0..REFERENCE_CHARSET.len())] as char)
        .collect();
    format!("REF-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_shape() {
        for _ in 0..32 {
            let reference = booking_reference();
            assert_eq!(reference.len(), 4 + REFERENCE_LEN);
            assert!(reference.starts_with("REF-"));
            assert!(reference[4..]
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }
}
