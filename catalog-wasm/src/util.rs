//! Мелкие помощники отображения.

use chrono::{DateTime, Utc};

/// CSS-класс бейджа рейтинга: зелёный от 80, жёлтый от 50, ниже — красный.
pub(crate) fn rating_badge_class(rating: f64) -> &'static str {
    if rating >= 80.0 {
        "badge badge-high"
    } else if rating >= 50.0 {
        "badge badge-mid"
    } else {
        "badge badge-low"
    }
}

pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub(crate) fn format_date_opt(date: &Option<DateTime<Utc>>) -> String {
    date.as_ref()
        .map(format_date)
        .unwrap_or_else(|| "—".to_string())
}

/// Обрезает текст по границе символов, добавляя многоточие.
pub(crate) fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_chars).collect();
    format!("{}…", clipped.trim_end())
}

/// Значение параметра строки запроса (с учётом percent-кодирования).
pub(crate) fn query_param(raw_query: &str, name: &str) -> Option<String> {
    raw_query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

/// Добавляет либо убирает идентификатор из списка выбранных.
pub(crate) fn toggle_id(ids: &mut Vec<u32>, id: u32) {
    if let Some(index) = ids.iter().position(|known| *known == id) {
        ids.remove(index);
    } else {
        ids.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_classes_follow_thresholds() {
        assert_eq!(rating_badge_class(92.0), "badge badge-high");
        assert_eq!(rating_badge_class(80.0), "badge badge-high");
        assert_eq!(rating_badge_class(50.0), "badge badge-mid");
        assert_eq!(rating_badge_class(49.9), "badge badge-low");
    }

    #[test]
    fn clip_respects_char_boundaries() {
        assert_eq!(clip("короткий", 20), "короткий");
        assert_eq!(clip("очень длинный текст", 5), "очень…");
    }

    #[test]
    fn query_param_decodes_value() {
        assert_eq!(
            query_param("?email=user%40example.com&x=1", "email").as_deref(),
            Some("user@example.com")
        );
        assert!(query_param("?email=", "email").is_none());
        assert!(query_param("", "email").is_none());
    }

    #[test]
    fn toggle_id_adds_and_removes() {
        let mut ids = vec![1, 2];
        toggle_id(&mut ids, 3);
        assert_eq!(ids, vec![1, 2, 3]);
        toggle_id(&mut ids, 2);
        assert_eq!(ids, vec![1, 3]);
    }
}
