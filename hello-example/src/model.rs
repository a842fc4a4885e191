use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub admin: bool,
}

/// In a real app this would come from a database
pub fn users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Ada".to_string(),
            admin: true,
        },
        User {
            id: "2".to_string(),
            name: "Grace".to_string(),
            admin: false,
        },
    ]
}
