use std::rc::Rc;
use crate::models::{Credentials, User, UserType};
use crate::routes::{OnNavigate, Route};
use crate::storage::{save_user, LocalStorage, JWT_KEY, USER_KEY};
use crate::store::{Store, StoreError};

pub struct Login {
    on_navigate: OnNavigate,
    store: Option<Rc<dyn Store>>,
    storage: Rc<dyn LocalStorage>,
}

impl Login {
    pub fn new(on_navigate: OnNavigate, store: Option<Rc<dyn Store>>, storage: Rc<dyn LocalStorage>) -> Self {
        Self { on_navigate, store, storage }
    }

    /// Records the employee, opens a session when a store is available, then shows the bills.
    /// A refused login leaves no user behind.
    pub async fn handle_submit_employee(&self, credentials: Credentials) -> Result<User, StoreError> {
        let user = User {
            user_type: UserType::Employee,
            email: Some(credentials.email.clone()),
            password: Some(credentials.password.clone()),
            status: Some("connected".to_string()),
        };
        save_user(self.storage.as_ref(), &user)?;
        if let Some(store) = &self.store {
            let jwt = match store.login(&credentials).await {
                Ok(jwt) => jwt,
                Err(e) => {
                    self.storage.remove_item(USER_KEY)?;
                    return Err(e);
                }
            };
            self.storage.set_item(JWT_KEY, &jwt)?;
        }
        tracing::debug!(email = %credentials.email, "employee connected");
        (self.on_navigate)(Route::Bills);
        Ok(user)
    }
}

/// Forgets the session and returns to the login page.
pub fn logout(storage: &dyn LocalStorage, on_navigate: &OnNavigate) -> Result<(), StoreError> {
    storage.remove_item(USER_KEY)?;
    storage.remove_item(JWT_KEY)?;
    on_navigate(Route::Login);
    Ok(())
}
