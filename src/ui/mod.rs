/// UI widget helpers
///
/// Pure view functions kept out of main.rs:
/// - The entry form for adding/editing a car (form.rs)
/// - One card per car in the collection grid (card.rs)

pub mod card;
pub mod form;
