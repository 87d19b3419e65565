//! JWT token encoding, decoding, and claims management.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{AccessToken, JwtEncoder};

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use outreach_core::config::AuthConfig;
    use outreach_core::error::ErrorKind;
    use outreach_entity::employee::{Employee, EmployeeRole};

    use super::*;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_access_ttl_minutes: 15,
        }
    }

    fn accountant() -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: "Rana Saleh".to_string(),
            username: "rana".to_string(),
            password_hash: String::new(),
            role: EmployeeRole::Accountant,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_issued_token_decodes_to_same_identity() {
        let cfg = config("unit-test-secret");
        let employee = accountant();

        let issued = JwtEncoder::new(&cfg)
            .generate_access_token(&employee)
            .unwrap();
        let claims = JwtDecoder::new(&cfg)
            .decode_access_token(&issued.token)
            .unwrap();

        assert_eq!(claims.employee_id(), employee.id);
        assert_eq!(claims.role, EmployeeRole::Accountant);
        assert_eq!(claims.name, "Rana Saleh");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let issued = JwtEncoder::new(&config("secret-a"))
            .generate_access_token(&accountant())
            .unwrap();

        let err = JwtDecoder::new(&config("secret-b"))
            .decode_access_token(&issued.token)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let cfg = config("unit-test-secret");
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: EmployeeRole::Manager,
            name: "Old Token".to_string(),
            iat: now - 7200,
            exp: now - 3600,
            jti: Uuid::new_v4(),
        };
        let token = JwtEncoder::new(&cfg).encode_claims(&claims).unwrap();

        let err = JwtDecoder::new(&cfg).decode_access_token(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, "Token has expired");
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let err = JwtDecoder::new(&config("unit-test-secret"))
            .decode_access_token("not.a.jwt")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }
}
