//! Checks conversion output against the RustCrypto SubjectPublicKeyInfo encoders

use base64::{Engine, prelude::BASE64_URL_SAFE_NO_PAD};
use jwk_pem::{JwkError, KeyType, convert};
use spki::{EncodePublicKey, der::pem::LineEnding};

fn b64(bytes: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(bytes)
}

fn reference_pem(der: spki::Document) -> String {
    der.to_pem("PUBLIC KEY", LineEnding::LF)
        .unwrap()
        .trim()
        .to_string()
}

#[test]
fn p256_matches_reference() {
    use p256::elliptic_curve::sec1::ToEncodedPoint;

    let secret = p256::SecretKey::from_slice(&[0x11; 32]).unwrap();
    let public = secret.public_key();
    let point = public.to_encoded_point(false);

    let jwk = format!(
        r#"{{"kty":"EC","crv":"P-256","x":"{}","y":"{}","kid":"p256"}}"#,
        b64(point.x().unwrap()),
        b64(point.y().unwrap())
    );

    let converted = convert(&jwk).unwrap();
    assert_eq!(converted.key_id, "p256");
    assert_eq!(
        converted.pem,
        reference_pem(public.to_public_key_der().unwrap())
    );
}

#[test]
fn p384_matches_reference() {
    use p384::elliptic_curve::sec1::ToEncodedPoint;

    let secret = p384::SecretKey::from_slice(&[0x22; 48]).unwrap();
    let public = secret.public_key();
    let point = public.to_encoded_point(false);

    let jwk = format!(
        r#"{{"kty":"EC","crv":"P-384","x":"{}","y":"{}"}}"#,
        b64(point.x().unwrap()),
        b64(point.y().unwrap())
    );

    assert_eq!(
        convert(&jwk).unwrap().pem,
        reference_pem(public.to_public_key_der().unwrap())
    );
}

#[test]
fn secp256k1_matches_reference() {
    use k256::elliptic_curve::sec1::ToEncodedPoint;

    let secret = k256::SecretKey::from_slice(&[0x33; 32]).unwrap();
    let public = secret.public_key();
    let point = public.to_encoded_point(false);

    let jwk = format!(
        r#"{{"kty":"EC","crv":"secp256k1","x":"{}","y":"{}"}}"#,
        b64(point.x().unwrap()),
        b64(point.y().unwrap())
    );

    assert_eq!(
        convert(&jwk).unwrap().pem,
        reference_pem(public.to_public_key_der().unwrap())
    );
}

#[test]
fn ed25519_matches_reference() {
    let signing = ed25519_dalek::SigningKey::from_bytes(&[0x44; 32]);
    let verifying = signing.verifying_key();

    let jwk = format!(
        r#"{{"kty":"OKP","crv":"Ed25519","x":"{}","kid":"ed"}}"#,
        b64(verifying.as_bytes())
    );

    let converted = convert(&jwk).unwrap();
    assert_eq!(converted.key_id, "ed");
    assert_eq!(
        converted.pem,
        reference_pem(verifying.to_public_key_der().unwrap())
    );
}

#[test]
fn rsa_matches_reference() {
    let n = "0vx7agoebGcQSuuPiLJXZptN9nndrQmbXEps2aiAFbWhM78LhWx4cbbfAAtVT86zwu1RK7aPFFxuhDR1L6tSoc_BJECPebWKRXjBZCiFV4n3oknjhMstn64tZ_2W-5JsGY4Hc5n9yBXArwl93lqt7_RN5w6Cf0h4QyQ5v-65YGjQR0_FDW2QvzqY368QQMicAtaSqzs8KJZgnYb9c7d0zgdAZHzu6qMQvRL5hajrn1n91CbOpbISD08qNLyrdkt-bFTWhAI4vMQFh6WeZu0fM4lFd2NcRwr3XPksINHaQ-G_xBniIqbw0Ls1jF44-csFCur-kEgU8awapJzKnqDKgw";

    let reference = rsa::RsaPublicKey::new(
        rsa::BigUint::from_bytes_be(&BASE64_URL_SAFE_NO_PAD.decode(n).unwrap()),
        rsa::BigUint::from(65537u32),
    )
    .unwrap();

    let jwk = format!(r#"{{"kty":"RSA","n":"{n}","e":"AQAB","alg":"RS256","use":"sig"}}"#);

    assert_eq!(
        convert(&jwk).unwrap().pem,
        reference_pem(reference.to_public_key_der().unwrap())
    );
}

#[test]
fn decoded_key_reports_its_type() {
    let jwk: jwk_pem::JWK = r#"{"kty":"OKP","crv":"X25519","x":"hSDwCYkwp1R0i33ctD73Wg2_Og0mOBr066SpjqqbTmo"}"#
        .parse()
        .unwrap();

    assert_eq!(jwk.public_key().unwrap().key_type(), KeyType::X25519);
}

#[test]
fn off_curve_point_is_a_decode_error() {
    use p256::elliptic_curve::sec1::ToEncodedPoint;

    let public = p256::SecretKey::from_slice(&[0x11; 32])
        .unwrap()
        .public_key();
    let point = public.to_encoded_point(false);
    let mut y = point.y().unwrap().to_vec();
    y[31] ^= 0x01;

    let jwk = format!(
        r#"{{"kty":"EC","crv":"P-256","x":"{}","y":"{}"}}"#,
        b64(point.x().unwrap()),
        b64(&y)
    );

    let err = convert(&jwk).unwrap_err();
    assert!(matches!(err, JwkError::Decode { .. }));
    assert_eq!(err.operation(), "decode_public_key");
}
