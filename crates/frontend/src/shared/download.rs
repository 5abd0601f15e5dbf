//! Скачивание сгенерированного изображения через временную ссылку.

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Сколько символов prompt попадает в имя файла
const MAX_NAME_CHARS: usize = 30;

const DEFAULT_FILE_STEM: &str = "generated_image";

/// Имя файла из prompt: первые 30 символов, пробелы схлопнуты в `_`.
///
/// ```
/// use studio_frontend::shared::download::download_file_name;
/// assert_eq!(download_file_name("A Cat!! "), "A_Cat!!.png");
/// assert_eq!(download_file_name(""), "generated_image.png");
/// ```
pub fn download_file_name(prompt: &str) -> String {
    let head: String = prompt.trim().chars().take(MAX_NAME_CHARS).collect();
    let stem = head.split_whitespace().collect::<Vec<_>>().join("_");

    if stem.is_empty() {
        format!("{}.png", DEFAULT_FILE_STEM)
    } else {
        format!("{}.png", stem)
    }
}

/// Инициирует скачивание `href` (data URI) через браузер
pub fn trigger_download(href: &str, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    // Создаем временную ссылку для скачивания
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(href);
    anchor.set_download(filename);

    // Добавляем в DOM, кликаем и удаляем
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_space_trimmed() {
        assert_eq!(download_file_name("A Cat!! "), "A_Cat!!.png");
    }

    #[test]
    fn test_empty_prompt_uses_default() {
        assert_eq!(download_file_name(""), "generated_image.png");
        assert_eq!(download_file_name(" \t\n "), "generated_image.png");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(download_file_name("sunset \t over\n\nthe sea"), "sunset_over_the_sea.png");
    }

    #[test]
    fn test_truncated_to_30_chars() {
        let prompt = "A cinematic photo of a fox on a Goa beach at dusk";
        assert_eq!(download_file_name(prompt), "A_cinematic_photo_of_a_fox_on.png");
    }

    #[test]
    fn test_truncation_counts_chars_not_bytes() {
        let prompt = "кот ".repeat(10);
        let name = download_file_name(&prompt);
        assert_eq!(name, "кот_кот_кот_кот_кот_кот_кот_ко.png");
    }
}
