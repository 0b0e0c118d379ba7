use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Статус успешного ответа каталога.
pub const STATUS_OK: &str = "success";
/// Статус ответа с ошибкой.
pub const STATUS_ERROR: &str = "error";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
/// Конверт любого ответа каталога: `{"status": ..., "error": ..., "data": ...}`.
pub struct ApiResponse<T> {
    /// `"success"` либо `"error"`.
    pub status: String,
    /// Текст ошибки сервера (только при `status == "error"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Полезная нагрузка (может отсутствовать и у успешного ответа).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Успешен ли ответ.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Извлекает полезную нагрузку или текст ошибки из конверта.
    pub fn into_data(self) -> Result<T, String> {
        if self.status == STATUS_OK {
            self.data
                .ok_or_else(|| "пустой ответ сервера".to_string())
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "неизвестная ошибка сервера".to_string()))
        }
    }

    /// То же, что [`ApiResponse::into_data`], но пустая `data` успешного
    /// ответа заменяется значением по умолчанию. Каталог отвечает
    /// `data: null` на списочные запросы без результатов.
    pub fn into_data_or_default(self) -> Result<T, String>
    where
        T: Default,
    {
        if self.status == STATUS_OK {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(self
                .error
                .unwrap_or_else(|| "неизвестная ошибка сервера".to_string()))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
/// Полезная нагрузка ответов аутентификации.
pub struct AccessTokenData {
    /// Access token (bearer).
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Фильм каталога вместе с агрегатами рейтинга.
pub struct Film {
    /// Идентификатор фильма.
    pub id: u32,
    /// Название.
    pub title: String,
    /// URL постера.
    #[serde(default)]
    pub poster_url: String,
    /// Краткое описание.
    #[serde(default)]
    pub synopsis: String,
    /// Дата выхода.
    pub release_date: DateTime<Utc>,
    /// Длительность в человекочитаемом виде, например `"2h 30m"`.
    #[serde(default)]
    pub runtime: String,
    /// Продюсер.
    #[serde(default)]
    pub producer: String,
    /// Дата создания записи.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Средний рейтинг, 0–100.
    #[serde(default)]
    pub avg_rating: f64,
    /// Общее число отзывов.
    #[serde(default)]
    pub total_reviews: u32,
    /// Отзывы с оценкой 0–20.
    #[serde(default)]
    pub count_ratings_0_20: u32,
    /// Отзывы с оценкой 21–40.
    #[serde(default)]
    pub count_ratings_21_40: u32,
    /// Отзывы с оценкой 41–60.
    #[serde(default)]
    pub count_ratings_41_60: u32,
    /// Отзывы с оценкой 61–80.
    #[serde(default)]
    pub count_ratings_61_80: u32,
    /// Отзывы с оценкой 81–100.
    #[serde(default)]
    pub count_ratings_81_100: u32,
    /// Идентификаторы жанров (если сервер не прислал полные данные).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genre_ids: Vec<u32>,
    /// Идентификаторы актёров (если сервер не прислал полные данные).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actor_ids: Vec<u32>,
    /// Полные данные жанров.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<Genre>,
    /// Полные данные актёров.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actors: Vec<Actor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Актёр каталога.
pub struct Actor {
    /// Идентификатор актёра.
    pub actor_id: u32,
    /// Имя.
    #[serde(default)]
    pub name: String,
    /// Ссылка на страницу в вики.
    #[serde(default)]
    pub wiki_url: String,
    /// URL аватара (может отсутствовать).
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Дата создания записи.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Жанр каталога.
pub struct Genre {
    /// Идентификатор жанра.
    pub genre_id: u32,
    /// Название.
    #[serde(default)]
    pub name: String,
    /// Дата создания записи.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Отзыв с денормализованными полями фильма и пользователя для отображения.
pub struct Review {
    /// Идентификатор отзыва.
    pub review_id: u32,
    /// Идентификатор автора отзыва.
    #[serde(default)]
    pub user_id: u32,
    /// Аватар автора.
    #[serde(default)]
    pub user_avatar_url: String,
    /// Идентификатор фильма.
    #[serde(default)]
    pub film_id: u32,
    /// Постер фильма.
    #[serde(default)]
    pub film_poster_url: String,
    /// Оценка, 0–100.
    pub rating: u8,
    /// Текст отзыва.
    #[serde(default)]
    pub review_text: String,
    /// Дата создания отзыва.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// Пользователь каталога (профиль либо строка админского списка).
pub struct User {
    /// Идентификатор пользователя (в ответе `/profile` отсутствует).
    #[serde(default)]
    pub user_id: Option<u32>,
    /// Логин.
    #[serde(default)]
    pub login: Option<String>,
    /// Email.
    #[serde(default)]
    pub email: Option<String>,
    /// URL аватара.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Признак администратора.
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Отображаемое имя: логин, иначе email, иначе заглушка.
    pub fn display_name(&self) -> String {
        self.login
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| "аноним".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
/// Запрос входа по email и паролю.
pub struct SignInRequest {
    /// Email пользователя.
    #[validate(email)]
    pub email: String,
    /// Пароль.
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
/// Запрос регистрации.
///
/// Помимо derive-валидации email, пароль проверяется отдельно функцией
/// [`crate::password_strength`].
pub struct SignUpRequest {
    /// Email пользователя.
    #[validate(email)]
    pub email: String,
    /// Пароль.
    pub password: String,
    /// Необязательный логин.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50))]
    pub login: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
/// Запрос создания отзыва.
pub struct CreateReviewRequest {
    /// Идентификатор фильма.
    pub film_id: u32,
    /// Оценка, 0–100.
    pub rating: u8,
    /// Текст отзыва.
    pub review_text: String,
}

#[derive(Debug, Clone, Serialize)]
/// Запрос обновления отзыва.
pub struct UpdateReviewRequest {
    /// Оценка, 0–100.
    pub rating: u8,
    /// Текст отзыва.
    pub review_text: String,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Метаданные фильма для создания/обновления через админку.
///
/// Передаются JSON-полем `data` multipart-запроса; постер идёт отдельной
/// бинарной частью. Формат `runtime` проверяется функцией
/// [`crate::runtime_format`].
pub struct FilmPayload {
    /// Название.
    pub title: String,
    /// Краткое описание.
    pub synopsis: String,
    /// Дата выхода (ISO-дата).
    pub release_date: String,
    /// Длительность, например `"2h 30m"` или `"90m"`.
    pub runtime: String,
    /// Продюсер.
    pub producer: String,
    /// Идентификаторы жанров.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genre_ids: Vec<u32>,
    /// Идентификаторы актёров.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actor_ids: Vec<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Метаданные актёра для создания/обновления через админку.
pub struct ActorPayload {
    /// Имя.
    pub name: String,
    /// Ссылка на страницу в вики.
    pub wiki_url: String,
}

#[derive(Debug, Clone, Serialize)]
/// Данные жанра для создания/обновления через админку.
pub struct GenrePayload {
    /// Идентификатор жанра (нужен при обновлении).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<u32>,
    /// Название.
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Изменяемые поля профиля. Пустая структура допустима: запрос тогда
/// несёт только аватар и/или флаг сброса.
pub struct ProfileUpdate {
    /// Новый логин.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_unwraps_success() {
        let raw = r#"{"status":"success","data":{"access_token":"abc"}}"#;
        let envelope: ApiResponse<AccessTokenData> =
            serde_json::from_str(raw).expect("envelope should parse");
        assert!(envelope.is_success());
        let data = envelope.into_data().expect("data should be present");
        assert_eq!(data.access_token, "abc");
    }

    #[test]
    fn envelope_surfaces_error_text() {
        let raw = r#"{"status":"error","error":"user already exists"}"#;
        let envelope: ApiResponse<AccessTokenData> =
            serde_json::from_str(raw).expect("envelope should parse");
        assert!(!envelope.is_success());
        let err = envelope.into_data().expect_err("must be an error");
        assert_eq!(err, "user already exists");
    }

    #[test]
    fn envelope_null_list_becomes_empty() {
        let raw = r#"{"status":"success","data":null}"#;
        let envelope: ApiResponse<Vec<Genre>> =
            serde_json::from_str(raw).expect("envelope should parse");
        let genres = envelope.into_data_or_default().expect("success");
        assert!(genres.is_empty());
    }

    #[test]
    fn film_parses_with_optional_blocks_missing() {
        let raw = r#"{
            "id": 7,
            "title": "Solaris",
            "poster_url": "https://cdn.example/posters/7.webp",
            "synopsis": "...",
            "release_date": "1972-03-20T00:00:00Z",
            "runtime": "2h 47m",
            "producer": "Mosfilm",
            "avg_rating": 87.5,
            "total_reviews": 12,
            "count_ratings_81_100": 9
        }"#;
        let film: Film = serde_json::from_str(raw).expect("film should parse");
        assert_eq!(film.id, 7);
        assert!(film.genres.is_empty());
        assert!(film.created_at.is_none());
        assert_eq!(film.count_ratings_81_100, 9);
        assert_eq!(film.count_ratings_0_20, 0);
    }

    #[test]
    fn sign_up_request_validates_email() {
        use validator::Validate;

        let ok = SignUpRequest {
            email: "user@example.com".to_string(),
            password: "Abc123".to_string(),
            login: Some("user1".to_string()),
        };
        assert!(ok.validate().is_ok());

        let bad = SignUpRequest {
            email: "not-an-email".to_string(),
            password: "Abc123".to_string(),
            login: None,
        };
        assert!(bad.validate().is_err());
    }
}
