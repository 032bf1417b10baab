use iced::widget::{button, column, image, row, text};
use iced::{Alignment, Element, Length};

use crate::state::data::CarRecord;
use crate::Message;

/// Pixel width of one card in the collection grid
const CARD_WIDTH: f32 = 200.0;
/// Pixel height of the photo thumbnail
const PHOTO_HEIGHT: f32 = 140.0;

/// Build one card for the collection grid: photo, name, metadata line,
/// and the Edit/Delete actions.
pub fn car_card(car: &CarRecord) -> Element<'_, Message> {
    let photo = image(image::Handle::from_path(&car.image))
        .width(Length::Fixed(CARD_WIDTH))
        .height(Length::Fixed(PHOTO_HEIGHT));

    let details = text(detail_line(car)).size(13);

    let actions = row![
        button(text("Edit").size(13)).on_press(Message::EditCar(car.id.clone())),
        button(text("Delete").size(13)).on_press(Message::RequestDelete(car.id.clone())),
    ]
    .spacing(8);

    column![
        photo,
        text(&car.name).size(16),
        details,
        actions,
    ]
    .spacing(6)
    .padding(8)
    .width(Length::Fixed(CARD_WIDTH + 16.0))
    .align_x(Alignment::Center)
    .into()
}

/// Secondary line under the name: key and year, skipping empty fields
fn detail_line(car: &CarRecord) -> String {
    match (car.key.is_empty(), car.year.is_empty()) {
        (false, false) => format!("{} · {}", car.key, car.year),
        (false, true) => car.key.clone(),
        (true, false) => car.year.clone(),
        (true, true) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(key: &str, year: &str) -> CarRecord {
        CarRecord {
            id: "1".to_string(),
            name: "Ford GT".to_string(),
            key: key.to_string(),
            year: year.to_string(),
            image: "img://1".to_string(),
        }
    }

    #[test]
    fn test_detail_line_skips_empty_fields() {
        assert_eq!(detail_line(&car("HW-2021", "2021")), "HW-2021 · 2021");
        assert_eq!(detail_line(&car("HW-2021", "")), "HW-2021");
        assert_eq!(detail_line(&car("", "2021")), "2021");
        assert_eq!(detail_line(&car("", "")), "");
    }
}
