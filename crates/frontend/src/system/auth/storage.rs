use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "access_token";
const USERNAME_KEY: &str = "username";
const EMPLOYEE_ID_KEY: &str = "cedulaEmpleado";
const ROLES_KEY: &str = "rolesAppActual";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.trim().is_empty())
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_item(ACCESS_TOKEN_KEY)
}

/// Stored user name, or the employee id when the login only kept that
pub fn get_username() -> Option<String> {
    get_item(USERNAME_KEY).or_else(|| get_item(EMPLOYEE_ID_KEY))
}

pub fn get_roles() -> Vec<String> {
    get_item(ROLES_KEY)
        .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
        .unwrap_or_default()
}

/// Logout wipes everything the identity server left behind
pub fn clear_all() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.clear();
    }
}
