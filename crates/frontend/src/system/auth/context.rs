use leptos::prelude::*;

use super::{jwt, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserInfo {
    pub username: String,
    pub email: Option<String>,
    pub id: Option<String>,
    pub roles: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// Session left in local storage by the identity server login page
fn restore_session() -> AuthState {
    let Some(access_token) = storage::get_access_token() else {
        return AuthState::default();
    };
    match jwt::decode_claims(&access_token) {
        Ok(claims) => {
            let username = storage::get_username()
                .or_else(|| claims.email.clone())
                .unwrap_or_default();
            log::info!("Session restored for {}", username);
            AuthState {
                access_token: Some(access_token),
                user_info: Some(UserInfo {
                    username,
                    email: claims.email.clone(),
                    id: claims.user_id(),
                    roles: storage::get_roles(),
                }),
            }
        }
        Err(e) => {
            log::warn!("Discarding stored token: {}", e);
            storage::clear_all();
            AuthState::default()
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(restore_session());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_all();
    set_auth_state.set(AuthState::default());
    log::info!("Logged out");
}
