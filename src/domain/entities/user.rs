/// A registered site account.
///
/// The password is kept exactly as submitted. There is no hashing anywhere in
/// the login path, so treat stored records as sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
