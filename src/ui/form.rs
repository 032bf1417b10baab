use iced::widget::{button, column, image, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::state::data::CarDraft;
use crate::Message;

/// Pixel height of the photo preview inside the form
const PREVIEW_HEIGHT: f32 = 120.0;

/// Build the entry form: name/key/year inputs, the two photo pickers
/// with a preview, and the submit/cancel actions.
///
/// The same form serves both add and edit mode; `editing` only changes
/// the button labels and whether Cancel is offered.
pub fn entry_form(draft: &CarDraft, editing: bool) -> Element<'_, Message> {
    let name = text_input("Name (required)", &draft.name)
        .on_input(Message::NameChanged)
        .padding(8);

    let key = text_input("Key", &draft.key)
        .on_input(Message::KeyChanged)
        .padding(8);

    let year = text_input("Year", &draft.year)
        .on_input(Message::YearChanged)
        .padding(8);

    let pickers = row![
        button(text("From Gallery").size(14)).on_press(Message::PickImage),
        button(text("From Camera").size(14)).on_press(Message::CaptureImage),
    ]
    .spacing(8);

    let preview: Element<'_, Message> = if draft.image.is_empty() {
        text("No photo selected").size(13).into()
    } else {
        image(image::Handle::from_path(&draft.image))
            .height(Length::Fixed(PREVIEW_HEIGHT))
            .into()
    };

    let submit_label = if editing { "Save Changes" } else { "Add Car" };
    let mut actions = row![button(text(submit_label).size(14)).on_press(Message::Submit)].spacing(8);
    if editing {
        actions = actions.push(button(text("Cancel").size(14)).on_press(Message::CancelEdit));
    }

    column![name, key, year, pickers, preview, actions]
        .spacing(10)
        .width(Length::Fixed(360.0))
        .align_x(Alignment::Start)
        .into()
}
