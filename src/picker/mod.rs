/// Image acquisition capability
///
/// The store only ever sees an image as an opaque local path; where it
/// comes from is this module's business. Both operations are async and
/// resolve to a tagged outcome so the caller can treat "user dismissed
/// the dialog" and "no access to the image folder" as plain branches,
/// not errors.

use std::path::PathBuf;

/// Supported photo extensions for the picker filter
const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "bmp"];

/// Outcome of an image acquisition attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// The user chose an image; the path is ready to store
    Obtained(String),
    /// The user dismissed the dialog; a no-op for the caller
    Cancelled,
    /// The image folder is not accessible; surfaced as a notice,
    /// never persisted
    PermissionDenied,
}

/// Pick an existing image from the user's picture library.
pub async fn pick_image() -> ImageOutcome {
    let Some(start_dir) = dirs::picture_dir().or_else(dirs::home_dir) else {
        return ImageOutcome::PermissionDenied;
    };

    show_dialog("Choose a Photo of the Car", start_dir).await
}

/// Capture a new image: the desktop analog of the camera roll.
///
/// Points the dialog at the platform pictures directory, where camera
/// imports land. No pictures directory means no camera-roll access.
pub async fn capture_image() -> ImageOutcome {
    let Some(pictures) = dirs::picture_dir() else {
        return ImageOutcome::PermissionDenied;
    };
    if !pictures.is_dir() {
        return ImageOutcome::PermissionDenied;
    }

    show_dialog("Choose a Freshly Captured Photo", pictures).await
}

async fn show_dialog(title: &str, start_dir: PathBuf) -> ImageOutcome {
    let file = rfd::AsyncFileDialog::new()
        .set_title(title)
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .set_directory(start_dir)
        .pick_file()
        .await;

    match file {
        Some(handle) => ImageOutcome::Obtained(handle.path().to_string_lossy().to_string()),
        None => ImageOutcome::Cancelled,
    }
}
