use super::validate;
use super::*;

#[test]
fn test_with_context_keeps_payload() {
    let err = Error::MessageTooLong {
        context: "inner",
        max: 10,
        actual: 11,
    }
    .with_context("NtruEncrypt::encrypt");

    assert_eq!(
        err,
        Error::MessageTooLong {
            context: "NtruEncrypt::encrypt",
            max: 10,
            actual: 11,
        }
    );
    assert_eq!(err.context(), "NtruEncrypt::encrypt");
}

#[test]
fn test_with_message() {
    let err = Error::InvalidEncoding {
        context: "decrypt",
        message: String::new(),
    }
    .with_message("padding is not zero");

    match err {
        Error::InvalidEncoding { context, message } => {
            assert_eq!(context, "decrypt");
            assert_eq!(message, "padding is not zero");
        }
        _ => panic!("Expected InvalidEncoding error"),
    }

    // Variants without a message are left alone
    let err = Error::UnsupportedEngine {
        context: "digest",
        id: 9,
    };
    assert_eq!(err.clone().with_message("ignored"), err);
}

#[test]
fn test_display() {
    let err = Error::InvalidLength {
        context: "public key",
        expected: 32,
        actual: 16,
    };
    assert_eq!(
        err.to_string(),
        "public key: invalid length (expected 32, got 16)"
    );

    let err = Error::KeyGenerationExhausted {
        context: "NtruKeyGenerator",
        attempts: 100,
    };
    assert_eq!(err.to_string(), "NtruKeyGenerator: gave up after 100 attempts");
}

#[test]
fn test_integrity_classification() {
    assert!(Error::DecryptionFailed {
        context: "x",
        message: String::new()
    }
    .is_integrity_failure());
    assert!(!Error::NotInitialized {
        context: "x",
        message: String::new()
    }
    .is_integrity_failure());
}

#[test]
fn test_validation_functions() {
    assert!(validate::key(true, "test", "should pass").is_ok());
    let err = validate::key(false, "test", "should fail").unwrap_err();
    assert!(matches!(err, Error::InvalidKey { context: "test", .. }));

    assert!(validate::length("buffer", 32, 32).is_ok());
    assert!(validate::length("buffer", 16, 32).is_err());

    let err = validate::message_length("encrypt", 12, 10).unwrap_err();
    assert_eq!(
        err,
        Error::MessageTooLong {
            context: "encrypt",
            max: 10,
            actual: 12
        }
    );
}

#[test]
fn test_result_ext() {
    let r: core::result::Result<(), Error> = Err(Error::Other {
        context: "a",
        message: "b".into(),
    });
    let r = r.with_context("outer");
    assert_eq!(r.unwrap_err().context(), "outer");
}
