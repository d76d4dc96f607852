//! [`ActorEntity`] implementation for [`Customer`].

use super::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CustomerError;

    /// Creates a new Customer from creation parameters. The email must look like one.
    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        validate_email(&params.email)?;
        Ok(Self::new(id, params.name, params.email))
    }

    /// Handles updates to the Customer entity.
    ///
    /// # Fields Updated
    /// - `name`: display name
    /// - `email`: contact address, validated like on create
    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(email) = update.email {
            validate_email(&email)?;
            self.email = email;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), CustomerError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(CustomerError::ValidationError(format!(
            "invalid email: {}",
            email
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_malformed_email() {
        let params = CustomerCreate {
            name: "Ana".to_string(),
            email: "ana.example.com".to_string(),
        };
        let result = Customer::from_create_params(CustomerId::from(1), params);
        assert!(matches!(result, Err(CustomerError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_update_keeps_old_email_when_new_one_is_invalid() {
        let mut customer = Customer::new("c1", "Ana", "ana@example.com");
        let update = CustomerUpdate {
            name: None,
            email: Some("nope".to_string()),
        };
        assert!(customer.on_update(update, &()).await.is_err());
        assert_eq!(customer.email, "ana@example.com");
    }
}
