use super::*;
use pqlat_api::{Error as CoreError, ResultExt};

#[test]
fn test_error_conversion() {
    let err = Error::param("q", "must be a power of two");
    match CoreError::from(err) {
        CoreError::InvalidParameter { context, message } => {
            assert_eq!(context, "q");
            assert_eq!(message, "must be a power of two");
        }
        _ => panic!("Expected InvalidParameter error"),
    }

    let err = Error::Length {
        context: "buffer",
        expected: 32,
        actual: 16,
    };
    assert_eq!(
        CoreError::from(err),
        CoreError::InvalidLength {
            context: "buffer",
            expected: 32,
            actual: 16,
        }
    );

    let err = Error::polynomial("DenseTernaryPolynomial", "coefficient 2");
    assert!(matches!(
        CoreError::from(err),
        CoreError::InvalidPolynomial {
            context: "DenseTernaryPolynomial",
            ..
        }
    ));

    let err = Error::UnsupportedEngine {
        context: "digest",
        id: 7,
    };
    assert_eq!(
        CoreError::from(err),
        CoreError::UnsupportedEngine {
            context: "digest",
            id: 7
        }
    );
}

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    let err = validate::parameter(false, "test", "should fail").unwrap_err();
    match err {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        _ => panic!("Expected Parameter error"),
    }

    assert!(validate::length("buffer", 32, 32).is_ok());
    assert!(validate::length("buffer", 16, 32).is_err());

    assert!(validate::ternary("t", -1).is_ok());
    assert!(validate::ternary("t", 2).is_err());
}

#[test]
fn test_core_conversion_with_context() {
    let r: Result<()> = Err(Error::Encoding {
        context: "sves",
        details: "illegal pair",
    });
    let err = r.with_context("NtruEncrypt::decrypt").unwrap_err();
    assert!(matches!(
        err,
        CoreError::InvalidEncoding {
            context: "NtruEncrypt::decrypt",
            ..
        }
    ));
}
