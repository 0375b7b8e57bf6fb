//! P-521 (secp521r1) public key decoding

use crate::{
    ECParams, JwkError, PublicKey,
    error::{DECODE_PUBLIC_KEY, Result},
};

/// Size of each affine coordinate in bytes
const COORDINATE_LEN: usize = 66;

/// Decodes a P-521 public key from JWK EC parameters
/// Points that aren't on the curve are rejected
pub fn public_key(params: &ECParams) -> Result<PublicKey> {
    let point = params.sec1_point(COORDINATE_LEN)?;

    let key = p521::PublicKey::from_sec1_bytes(&point).map_err(|_| {
        JwkError::decode(
            DECODE_PUBLIC_KEY,
            "P-521 public key isn't a valid curve point",
        )
    })?;

    Ok(PublicKey::P521(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_to_pem() {
        let params = ECParams {
            curve: "P-521".to_string(),
            x: "AZqGwrtYJ3FeCfmtHUKvtfaCm_BOJYE4Led6VZx3OLKqH20fg0NpMBkIub77tnqHIDZXtB2QEcbj4NgTyNDJJvpn"
                .to_string(),
            y: "AWXjzHFHUTy68CA7b_wCiSh2wP0tVOo5nAq6kjwibZFebmgSPk_8Qy_9fbHKKtZPDPdoC7flwuVIgD-YAZ4O1dHg"
                .to_string(),
            d: None,
        };

        let pem = public_key(&params).unwrap().to_public_key_pem().unwrap();
        assert_eq!(
            pem,
            "-----BEGIN PUBLIC KEY-----\n\
             MIGbMBAGByqGSM49AgEGBSuBBAAjA4GGAAQBmobCu1gncV4J+a0dQq+19oKb8E4l\n\
             gTgt53pVnHc4sqofbR+DQ2kwGQi5vvu2eocgNle0HZARxuPg2BPI0Mkm+mcBZePM\n\
             cUdRPLrwIDtv/AKJKHbA/S1U6jmcCrqSPCJtkV5uaBI+T/xDL/19scoq1k8M92gL\n\
             t+XC5UiAP5gBng7V0eA=\n\
             -----END PUBLIC KEY-----"
        );
    }
}
