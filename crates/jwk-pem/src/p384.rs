//! P-384 (secp384r1) public key decoding

use crate::{
    ECParams, JwkError, PublicKey,
    error::{DECODE_PUBLIC_KEY, Result},
};

/// Size of each affine coordinate in bytes
const COORDINATE_LEN: usize = 48;

/// Decodes a P-384 public key from JWK EC parameters
/// Points that aren't on the curve are rejected
pub fn public_key(params: &ECParams) -> Result<PublicKey> {
    let point = params.sec1_point(COORDINATE_LEN)?;

    let key = p384::PublicKey::from_sec1_bytes(&point).map_err(|_| {
        JwkError::decode(
            DECODE_PUBLIC_KEY,
            "P-384 public key isn't a valid curve point",
        )
    })?;

    Ok(PublicKey::P384(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_to_pem() {
        let params = ECParams {
            curve: "P-384".to_string(),
            x: "-_lglZFetYc5D4UOyVs19hiuEhxypwgIrY-fTCYbYCtjVBdD45X3x3jlK7KMGNyD".to_string(),
            y: "AWpv8_csk2gyatUKO9FIpTzSITu0gORzCtAZ24euEAmV7GXfAR4ZgRoV3J3fyas8".to_string(),
            d: None,
        };

        let pem = public_key(&params).unwrap().to_public_key_pem().unwrap();
        assert_eq!(
            pem,
            "-----BEGIN PUBLIC KEY-----\n\
             MHYwEAYHKoZIzj0CAQYFK4EEACIDYgAE+/lglZFetYc5D4UOyVs19hiuEhxypwgI\n\
             rY+fTCYbYCtjVBdD45X3x3jlK7KMGNyDAWpv8/csk2gyatUKO9FIpTzSITu0gORz\n\
             CtAZ24euEAmV7GXfAR4ZgRoV3J3fyas8\n\
             -----END PUBLIC KEY-----"
        );
    }

    #[test]
    fn p256_sized_coordinates_are_rejected() {
        let params = ECParams {
            curve: "P-384".to_string(),
            x: "OqtR8tur0bXp3dpvHg8S4R_bjFEFGBfv4WKYU6o7llc".to_string(),
            y: "nPBTM3K9oYq4YyajBb7BTKCOZBWJIqvX0Cbokd03QK8".to_string(),
            d: None,
        };

        let err = public_key(&params).unwrap_err();
        assert!(err.message().contains("must be 48 bytes, got 32"));
    }
}
