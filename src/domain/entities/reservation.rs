/// A table booking request. Date and time are free-form text as typed into the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub guests: Option<i32>,
    pub message: Option<String>,
}
