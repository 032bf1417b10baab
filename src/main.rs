use iced::widget::{column, container, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Task, Theme};
use iced_aw::Wrap;

// Declare the application modules
mod picker;
mod state;
mod ui;

use picker::ImageOutcome;
use state::data::{CarDraft, CarRecord};
use state::filter::filter_owned;
use state::prefs::{KeyValue, MemoryPrefs, PrefsFile};
use state::store::CollectionStore;

/// Main application state
struct ToyGarage {
    /// The authoritative car collection and its persistence
    store: CollectionStore<Box<dyn KeyValue>>,
    /// Form fields for the car being added or edited
    form: CarDraft,
    /// Id of the car being edited, if the form is in edit mode
    editing: Option<String>,
    /// Live search query
    query: String,
    /// Derived view: the cars matching the current query. Recomputed
    /// after every mutation and every keystroke, never patched.
    visible: Vec<CarRecord>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Form field edits
    NameChanged(String),
    KeyChanged(String),
    YearChanged(String),
    /// Search box edits
    SearchChanged(String),
    /// User asked to pick a photo from the gallery
    PickImage,
    /// User asked for a freshly captured photo
    CaptureImage,
    /// A picker resolved
    ImagePicked(ImageOutcome),
    /// Submit the form (add, or save when editing)
    Submit,
    /// Load a car into the form for editing
    EditCar(String),
    /// Leave edit mode without saving
    CancelEdit,
    /// User clicked Delete; confirmation dialog still pending
    RequestDelete(String),
    /// Confirmation dialog resolved
    DeleteDecided(String, bool),
}

impl ToyGarage {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // A broken data directory must not stop the app; fall back to
        // an in-memory session (nothing will persist).
        let prefs: Box<dyn KeyValue> = match PrefsFile::open_default() {
            Ok(prefs) => Box::new(prefs),
            Err(e) => {
                eprintln!("⚠️  No usable prefs file, running in-memory only: {}", e);
                Box::new(MemoryPrefs::new())
            }
        };

        let store = CollectionStore::load(prefs);
        let visible = store.cars().to_vec();
        let status = format!("Ready. {} cars in the garage.", store.cars().len());

        (
            ToyGarage {
                store,
                form: CarDraft::default(),
                editing: None,
                query: String::new(),
                visible,
                status,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(name) => {
                self.form.name = name;
                Task::none()
            }
            Message::KeyChanged(key) => {
                self.form.key = key;
                Task::none()
            }
            Message::YearChanged(year) => {
                self.form.year = year;
                Task::none()
            }
            Message::SearchChanged(query) => {
                self.query = query;
                self.refresh_visible();
                Task::none()
            }
            Message::PickImage => Task::perform(picker::pick_image(), Message::ImagePicked),
            Message::CaptureImage => Task::perform(picker::capture_image(), Message::ImagePicked),
            Message::ImagePicked(outcome) => {
                match outcome {
                    ImageOutcome::Obtained(path) => {
                        self.form.image = path;
                        self.status = "📷 Photo selected.".to_string();
                    }
                    ImageOutcome::Cancelled => {}
                    ImageOutcome::PermissionDenied => {
                        self.status =
                            "⚠️  No access to the photo library on this system.".to_string();
                    }
                }
                Task::none()
            }
            Message::Submit => {
                let draft = self.form.clone();
                let result = match &self.editing {
                    Some(id) => self.store.update(id, draft),
                    None => self.store.add(draft),
                };

                match result {
                    Ok(_) => {
                        let verb = if self.editing.is_some() { "updated" } else { "added" };
                        self.status = format!(
                            "✅ Car {}. {} cars in the garage.",
                            verb,
                            self.store.cars().len()
                        );
                        self.form = CarDraft::default();
                        self.editing = None;
                        self.refresh_visible();
                    }
                    Err(e) => {
                        self.status = format!("⚠️  {}", e);
                    }
                }
                Task::none()
            }
            Message::EditCar(id) => {
                if let Some(car) = self.store.get(&id) {
                    self.form = CarDraft::from_record(car);
                    self.status = format!("Editing \"{}\".", car.name);
                    self.editing = Some(id);
                }
                Task::none()
            }
            Message::CancelEdit => {
                self.form = CarDraft::default();
                self.editing = None;
                self.status = "Edit cancelled.".to_string();
                Task::none()
            }
            Message::RequestDelete(id) => {
                let Some(car) = self.store.get(&id) else {
                    return Task::none();
                };
                let name = car.name.clone();

                Task::perform(confirm_delete(name), move |accepted| {
                    Message::DeleteDecided(id.clone(), accepted)
                })
            }
            Message::DeleteDecided(id, accepted) => {
                if accepted {
                    let remaining = self.store.remove(&id).len();
                    self.status = format!("🗑️  Car removed. {} cars in the garage.", remaining);
                    // Dropping a car may also drop it from edit mode
                    if self.editing.as_deref() == Some(id.as_str()) {
                        self.form = CarDraft::default();
                        self.editing = None;
                    }
                    self.refresh_visible();
                }
                Task::none()
            }
        }
    }

    /// Recompute the visible list from the live query and collection
    fn refresh_visible(&mut self) {
        self.visible = filter_owned(self.store.cars(), &self.query);
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let search = text_input("Search by name...", &self.query)
            .on_input(Message::SearchChanged)
            .padding(8)
            .width(Length::Fixed(360.0));

        let cards: Vec<Element<Message>> =
            self.visible.iter().map(ui::card::car_card).collect();

        let grid: Element<Message> = if cards.is_empty() {
            text("No cars to show.").size(14).into()
        } else {
            Wrap::with_elements(cards).spacing(12.0).line_spacing(12.0).into()
        };

        let content = column![
            text("Toy Garage").size(36),
            ui::form::entry_form(&self.form, self.editing.is_some()),
            search,
            scrollable(grid).height(Length::Fill),
            text(&self.status).size(14),
        ]
        .spacing(16)
        .padding(24)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application("Toy Garage", ToyGarage::update, ToyGarage::view)
        .theme(ToyGarage::theme)
        .centered()
        .run_with(ToyGarage::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A garage over in-memory prefs, bypassing the on-disk file
    fn garage() -> ToyGarage {
        let store = CollectionStore::load(Box::new(MemoryPrefs::new()) as Box<dyn KeyValue>);
        ToyGarage {
            store,
            form: CarDraft::default(),
            editing: None,
            query: String::new(),
            visible: Vec::new(),
            status: String::new(),
        }
    }

    /// Drive the form through the same messages the UI would send
    fn add_car(app: &mut ToyGarage, name: &str, image: &str) {
        let _ = app.update(Message::NameChanged(name.to_string()));
        let _ = app.update(Message::ImagePicked(ImageOutcome::Obtained(image.to_string())));
        let _ = app.update(Message::Submit);
    }

    fn visible_names(app: &ToyGarage) -> Vec<&str> {
        app.visible.iter().map(|car| car.name.as_str()).collect()
    }

    #[test]
    fn test_visible_list_stays_filtered_after_add() {
        let mut app = garage();
        add_car(&mut app, "Bugatti", "img://1");

        let _ = app.update(Message::SearchChanged("bug".to_string()));
        assert_eq!(visible_names(&app), vec!["Bugatti"]);

        // A non-matching addition must not wash the active filter away
        add_car(&mut app, "Lamborghini", "img://2");
        assert_eq!(visible_names(&app), vec!["Bugatti"]);
        assert_eq!(app.store.cars().len(), 2);

        // A matching addition shows up immediately
        add_car(&mut app, "Bugatti Chiron", "img://3");
        assert_eq!(visible_names(&app), vec!["Bugatti", "Bugatti Chiron"]);
    }

    #[test]
    fn test_visible_list_stays_filtered_after_delete() {
        let mut app = garage();
        add_car(&mut app, "Bugatti", "img://1");
        add_car(&mut app, "Lamborghini", "img://2");

        let _ = app.update(Message::SearchChanged("gatti".to_string()));
        assert_eq!(visible_names(&app), vec!["Bugatti"]);
        let id = app.visible[0].id.clone();

        // A declined confirmation changes nothing
        let _ = app.update(Message::DeleteDecided(id.clone(), false));
        assert_eq!(visible_names(&app), vec!["Bugatti"]);
        assert_eq!(app.store.cars().len(), 2);

        // An accepted one removes the car and keeps the filter live
        let _ = app.update(Message::DeleteDecided(id, true));
        assert!(app.visible.is_empty());
        assert_eq!(app.store.cars().len(), 1);
        assert_eq!(app.store.cars()[0].name, "Lamborghini");
    }

    #[test]
    fn test_visible_list_stays_filtered_after_edit() {
        let mut app = garage();
        add_car(&mut app, "Bugatti", "img://1");
        add_car(&mut app, "Lamborghini", "img://2");
        let id = app.store.cars()[0].id.clone();

        let _ = app.update(Message::SearchChanged("bugatti".to_string()));
        assert_eq!(visible_names(&app), vec!["Bugatti"]);

        // Renaming the only hit out of the query empties the view
        let _ = app.update(Message::EditCar(id));
        let _ = app.update(Message::NameChanged("Ford GT".to_string()));
        let _ = app.update(Message::Submit);

        assert!(app.visible.is_empty());
        assert_eq!(app.store.cars()[0].name, "Ford GT");
    }

    #[test]
    fn test_rejected_submit_reports_and_keeps_collection() {
        let mut app = garage();

        // No photo selected
        let _ = app.update(Message::NameChanged("Civic".to_string()));
        let _ = app.update(Message::Submit);

        assert!(app.store.cars().is_empty());
        assert!(app.status.contains("photo"));
        // Form keeps the typed name so the user can fix the draft
        assert_eq!(app.form.name, "Civic");
    }
}

/// Ask the user to confirm a deletion; resolves to true on accept
async fn confirm_delete(name: String) -> bool {
    let result = rfd::AsyncMessageDialog::new()
        .set_title("Remove Car")
        .set_description(format!("Remove \"{}\" from the garage?", name))
        .set_level(rfd::MessageLevel::Warning)
        .set_buttons(rfd::MessageButtons::YesNo)
        .show()
        .await;

    matches!(result, rfd::MessageDialogResult::Yes)
}
