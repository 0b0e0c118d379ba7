//! Контроллер состояния фильтров и пагинации списков.
//!
//! Держит в согласии три вещи: состояние фильтров в памяти, строку запроса
//! в адресе браузера и текущую страницу результатов. Сериализация
//! канонична: ключи со значениями по умолчанию в строку не попадают,
//! поэтому одинаковые фильтры всегда дают одинаковый (минимальный) URL.

use std::borrow::Cow;

use thiserror::Error;

/// Номер страницы по умолчанию.
pub const DEFAULT_PAGE: u32 = 1;
/// Размер страницы по умолчанию.
pub const DEFAULT_PAGE_SIZE: u32 = 9;
/// Верхняя граница рейтинга.
pub const RATING_MAX: u8 = 100;
/// Верхняя граница длительности фильтра, в минутах.
pub const DURATION_MAX_MINUTES: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Поле сортировки списка фильмов.
pub enum SortField {
    /// По среднему рейтингу.
    AvgRating,
    /// По дате выхода.
    ReleaseDate,
    /// По длительности.
    Runtime,
}

impl SortField {
    /// Значение ключа `sort_by` в строке запроса.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AvgRating => "avg_rating",
            Self::ReleaseDate => "release_date",
            Self::Runtime => "runtime",
        }
    }

    /// Разбирает значение `sort_by`; незнакомые значения отбрасываются.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "avg_rating" => Some(Self::AvgRating),
            "release_date" => Some(Self::ReleaseDate),
            "runtime" => Some(Self::Runtime),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Направление сортировки.
pub enum SortOrder {
    /// По возрастанию.
    Asc,
    /// По убыванию (значение по умолчанию).
    #[default]
    Desc,
}

impl SortOrder {
    /// Значение ключа `order` в строке запроса.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Разбирает значение `order`; незнакомые значения дают умолчание.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "asc" => Self::Asc,
            _ => Self::Desc,
        }
    }

    /// Противоположное направление.
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Состояние фильтров списка фильмов.
///
/// Живёт в рамках одного визита страницы: на монтировании восстанавливается
/// из строки запроса, при каждом действии пользователя записывается обратно.
pub struct FilmFilter {
    /// Выбранные жанры.
    pub genre_ids: Vec<u32>,
    /// Выбранные актёры.
    pub actor_ids: Vec<u32>,
    /// Продюсер (подстрока).
    pub producer: String,
    /// Нижняя граница рейтинга.
    pub min_rating: u8,
    /// Верхняя граница рейтинга.
    pub max_rating: u8,
    /// Нижняя граница даты выхода (ISO-дата).
    pub min_date: String,
    /// Верхняя граница даты выхода (ISO-дата).
    pub max_date: String,
    /// Нижняя граница длительности, минуты.
    pub min_duration: u32,
    /// Верхняя граница длительности, минуты.
    pub max_duration: u32,
    /// Поле сортировки; `None` — без сортировки.
    pub sort_by: Option<SortField>,
    /// Направление сортировки; осмысленно только вместе с `sort_by`.
    pub order: SortOrder,
    /// Свободный поисковый запрос. Непустое значение переключает страницу
    /// на поисковый эндпоинт, остальные фильтры при этом не передаются.
    pub query: String,
    /// Номер страницы, с 1.
    pub page: u32,
    /// Размер страницы.
    pub page_size: u32,
}

impl Default for FilmFilter {
    fn default() -> Self {
        Self {
            genre_ids: Vec::new(),
            actor_ids: Vec::new(),
            producer: String::new(),
            min_rating: 0,
            max_rating: RATING_MAX,
            min_date: String::new(),
            max_date: String::new(),
            min_duration: 0,
            max_duration: DURATION_MAX_MINUTES,
            sort_by: None,
            order: SortOrder::default(),
            query: String::new(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilmFilter {
    /// Восстанавливает состояние из строки запроса URL.
    ///
    /// Незнакомые ключи игнорируются, некорректные значения заменяются
    /// умолчаниями; `page` без числа становится 1.
    pub fn from_query_string(raw: &str) -> Self {
        let mut filter = Self::default();
        for (key, value) in split_query(raw) {
            match key.as_ref() {
                "genre_ids" => filter.genre_ids = parse_id_list(&value),
                "actor_ids" => filter.actor_ids = parse_id_list(&value),
                "producer" => filter.producer = value.into_owned(),
                "min_rating" => filter.min_rating = value.parse().unwrap_or(0),
                "max_rating" => filter.max_rating = value.parse().unwrap_or(RATING_MAX),
                "min_date" => filter.min_date = value.into_owned(),
                "max_date" => filter.max_date = value.into_owned(),
                "min_duration" => {
                    filter.min_duration = parse_minutes(&value).unwrap_or(0);
                }
                "max_duration" => {
                    filter.max_duration = parse_minutes(&value).unwrap_or(DURATION_MAX_MINUTES);
                }
                "sort_by" => filter.sort_by = SortField::parse(&value),
                "order" => filter.order = SortOrder::parse(&value),
                "query" => filter.query = value.into_owned(),
                "page" => filter.page = parse_page(&value),
                "page_size" => {
                    filter.page_size = value
                        .parse()
                        .ok()
                        .filter(|size| *size >= 1)
                        .unwrap_or(DEFAULT_PAGE_SIZE);
                }
                _ => {}
            }
        }
        filter
    }

    /// Пары ключ/значение канонической строки запроса (без кодирования).
    ///
    /// Эмитятся только ключи, отличающиеся от умолчаний; списки id
    /// склеиваются запятыми; длительности получают суффикс `m`; `order`
    /// появляется только при выбранном `sort_by`.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.genre_ids.is_empty() {
            pairs.push(("genre_ids", join_ids(&self.genre_ids)));
        }
        if !self.actor_ids.is_empty() {
            pairs.push(("actor_ids", join_ids(&self.actor_ids)));
        }
        if !self.producer.is_empty() {
            pairs.push(("producer", self.producer.clone()));
        }
        if self.min_rating != 0 {
            pairs.push(("min_rating", self.min_rating.to_string()));
        }
        if self.max_rating != RATING_MAX {
            pairs.push(("max_rating", self.max_rating.to_string()));
        }
        if !self.min_date.is_empty() {
            pairs.push(("min_date", self.min_date.clone()));
        }
        if !self.max_date.is_empty() {
            pairs.push(("max_date", self.max_date.clone()));
        }
        if self.min_duration != 0 {
            pairs.push(("min_duration", format!("{}m", self.min_duration)));
        }
        if self.max_duration != DURATION_MAX_MINUTES {
            pairs.push(("max_duration", format!("{}m", self.max_duration)));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sort_by", sort_by.as_str().to_string()));
            if self.order != SortOrder::default() {
                pairs.push(("order", self.order.as_str().to_string()));
            }
        }
        if !self.query.is_empty() {
            pairs.push(("query", self.query.clone()));
        }
        if self.page != DEFAULT_PAGE {
            pairs.push(("page", self.page.to_string()));
        }
        if self.page_size != DEFAULT_PAGE_SIZE {
            pairs.push(("page_size", self.page_size.to_string()));
        }
        pairs
    }

    /// Каноническая строка запроса (без ведущего `?`).
    pub fn to_query_string(&self) -> String {
        encode_pairs(self.to_query_pairs())
    }

    /// Копия фильтра с другим номером страницы.
    pub fn with_page(&self, page: u32) -> Self {
        let mut filter = self.clone();
        filter.page = page;
        filter
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Состояние фильтров списка актёров. Дисциплина сериализации та же,
/// что у [`FilmFilter`].
pub struct ActorFilter {
    /// Имя (подстрока).
    pub name: String,
    /// Нижняя граница года рождения.
    pub min_year: Option<u32>,
    /// Верхняя граница года рождения.
    pub max_year: Option<u32>,
    /// Минимальное число фильмов.
    pub min_movies_count: Option<u32>,
    /// Максимальное число фильмов.
    pub max_movies_count: Option<u32>,
    /// Поле сортировки; пустая строка — без сортировки.
    pub sort_by: String,
    /// Направление сортировки.
    pub order: SortOrder,
    /// Номер страницы, с 1.
    pub page: u32,
    /// Размер страницы.
    pub page_size: u32,
}

impl Default for ActorFilter {
    fn default() -> Self {
        Self {
            name: String::new(),
            min_year: None,
            max_year: None,
            min_movies_count: None,
            max_movies_count: None,
            sort_by: String::new(),
            order: SortOrder::default(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ActorFilter {
    /// Восстанавливает состояние из строки запроса URL.
    pub fn from_query_string(raw: &str) -> Self {
        let mut filter = Self::default();
        for (key, value) in split_query(raw) {
            match key.as_ref() {
                "name" => filter.name = value.into_owned(),
                "min_year" => filter.min_year = value.parse().ok(),
                "max_year" => filter.max_year = value.parse().ok(),
                "min_movies_count" => filter.min_movies_count = value.parse().ok(),
                "max_movies_count" => filter.max_movies_count = value.parse().ok(),
                "sort_by" => filter.sort_by = value.into_owned(),
                "order" => filter.order = SortOrder::parse(&value),
                "page" => filter.page = parse_page(&value),
                "page_size" => {
                    filter.page_size = value
                        .parse()
                        .ok()
                        .filter(|size| *size >= 1)
                        .unwrap_or(DEFAULT_PAGE_SIZE);
                }
                _ => {}
            }
        }
        filter
    }

    /// Пары ключ/значение канонической строки запроса (без кодирования).
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.name.is_empty() {
            pairs.push(("name", self.name.clone()));
        }
        if let Some(year) = self.min_year {
            pairs.push(("min_year", year.to_string()));
        }
        if let Some(year) = self.max_year {
            pairs.push(("max_year", year.to_string()));
        }
        if let Some(count) = self.min_movies_count {
            pairs.push(("min_movies_count", count.to_string()));
        }
        if let Some(count) = self.max_movies_count {
            pairs.push(("max_movies_count", count.to_string()));
        }
        if !self.sort_by.is_empty() {
            pairs.push(("sort_by", self.sort_by.clone()));
            if self.order != SortOrder::default() {
                pairs.push(("order", self.order.as_str().to_string()));
            }
        }
        if self.page != DEFAULT_PAGE {
            pairs.push(("page", self.page.to_string()));
        }
        if self.page_size != DEFAULT_PAGE_SIZE {
            pairs.push(("page_size", self.page_size.to_string()));
        }
        pairs
    }

    /// Каноническая строка запроса (без ведущего `?`).
    pub fn to_query_string(&self) -> String {
        encode_pairs(self.to_query_pairs())
    }

    /// Копия фильтра с другим номером страницы.
    pub fn with_page(&self, page: u32) -> Self {
        let mut filter = self.clone();
        filter.page = page;
        filter
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Ошибка разбора номера страницы, введённого вручную.
pub enum PageInputError {
    /// Ввод не является положительным целым числом.
    #[error("номер страницы должен быть положительным числом")]
    NotAPositiveNumber,
    /// Число больше известного количества страниц.
    #[error("страницы с таким номером нет")]
    OutOfRange,
}

/// Проверяет номер страницы, введённый в поле пагинации.
///
/// `total_pages == None` означает, что верхняя граница неизвестна
/// (на последней странице ещё не были) и проверяется только формат.
pub fn parse_page_input(raw: &str, total_pages: Option<u32>) -> Result<u32, PageInputError> {
    let page: u32 = raw
        .trim()
        .parse()
        .map_err(|_| PageInputError::NotAPositiveNumber)?;
    if page == 0 {
        return Err(PageInputError::NotAPositiveNumber);
    }
    if let Some(total) = total_pages {
        if page > total {
            return Err(PageInputError::OutOfRange);
        }
    }
    Ok(page)
}

/// Эвристика «есть ли следующая страница»: каталог не возвращает общее
/// количество, поэтому признаком конца служит неполная страница.
pub fn has_next_page(rows_fetched: usize, page_size: u32) -> bool {
    rows_fetched as u64 >= u64::from(page_size)
}

fn parse_page(raw: &str) -> u32 {
    raw.parse().ok().filter(|page| *page >= 1).unwrap_or(DEFAULT_PAGE)
}

fn parse_id_list(raw: &str) -> Vec<u32> {
    raw.split(',')
        .filter_map(|part| part.trim().parse().ok())
        .collect()
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Длительность из строки запроса: `"90m"` либо просто `"90"`.
fn parse_minutes(raw: &str) -> Option<u32> {
    raw.trim().trim_end_matches('m').parse().ok()
}

fn split_query(raw: &str) -> impl Iterator<Item = (Cow<'_, str>, Cow<'_, str>)> {
    raw.trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
}

fn decode_component(raw: &str) -> Cow<'_, str> {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Borrowed(raw),
    }
}

fn encode_pairs(pairs: Vec<(&'static str, String)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| format!("{key}={}", encode_component(&value)))
        .collect::<Vec<_>>()
        .join("&")
}

// Запятая остаётся как есть: это разделитель списков id.
fn encode_component(value: &str) -> String {
    urlencoding::encode(value).replace("%2C", ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_serializes_to_empty_string() {
        let filter = FilmFilter::default();
        assert_eq!(filter.to_query_string(), "");
    }

    #[test]
    fn non_default_keys_are_present() {
        let filter = FilmFilter {
            genre_ids: vec![3, 7],
            sort_by: Some(SortField::AvgRating),
            order: SortOrder::Asc,
            ..FilmFilter::default()
        };
        let query = filter.to_query_string();
        assert!(query.contains("genre_ids=3,7"), "query was: {query}");
        assert!(query.contains("sort_by=avg_rating"));
        assert!(query.contains("order=asc"));
    }

    #[test]
    fn order_is_dropped_without_sort_by() {
        let filter = FilmFilter {
            order: SortOrder::Asc,
            ..FilmFilter::default()
        };
        assert_eq!(filter.to_query_string(), "");
    }

    #[test]
    fn default_order_is_dropped_with_sort_by() {
        let filter = FilmFilter {
            sort_by: Some(SortField::Runtime),
            ..FilmFilter::default()
        };
        assert_eq!(filter.to_query_string(), "sort_by=runtime");
    }

    #[test]
    fn durations_get_minute_suffix() {
        let filter = FilmFilter {
            min_duration: 60,
            max_duration: 180,
            ..FilmFilter::default()
        };
        let query = filter.to_query_string();
        assert!(query.contains("min_duration=60m"));
        assert!(query.contains("max_duration=180m"));
    }

    #[test]
    fn text_values_are_percent_encoded() {
        let filter = FilmFilter {
            producer: "Стивен Спилберг".to_string(),
            ..FilmFilter::default()
        };
        let query = filter.to_query_string();
        assert!(query.starts_with("producer=%D0%A1"));
        assert_eq!(FilmFilter::from_query_string(&query).producer, "Стивен Спилберг");
    }

    #[test]
    fn round_trip_preserves_normalized_state() {
        let filter = FilmFilter {
            genre_ids: vec![1, 5, 9],
            actor_ids: vec![4],
            producer: "Mosfilm".to_string(),
            min_rating: 40,
            max_rating: 95,
            min_date: "1970-01-01".to_string(),
            max_date: "1999-12-31".to_string(),
            min_duration: 90,
            max_duration: 240,
            sort_by: Some(SortField::ReleaseDate),
            order: SortOrder::Asc,
            query: String::new(),
            page: 3,
            page_size: 18,
        };
        let restored = FilmFilter::from_query_string(&filter.to_query_string());
        assert_eq!(restored, filter);
    }

    #[test]
    fn serialization_is_idempotent_after_first_normalization() {
        let raw = "max_rating=100&min_duration=0m&order=desc&page=1&page_size=9";
        let normalized = FilmFilter::from_query_string(raw);
        assert_eq!(normalized, FilmFilter::default());
        assert_eq!(normalized.to_query_string(), "");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let filter = FilmFilter::from_query_string("utm_source=ads&genre_ids=2&foo=bar");
        assert_eq!(filter.genre_ids, vec![2]);
        assert_eq!(filter.to_query_string(), "genre_ids=2");
    }

    #[test]
    fn page_falls_back_to_one() {
        assert_eq!(FilmFilter::from_query_string("page=abc").page, 1);
        assert_eq!(FilmFilter::from_query_string("page=0").page, 1);
        assert_eq!(FilmFilter::from_query_string("").page, 1);
        assert_eq!(FilmFilter::from_query_string("page=5").page, 5);
    }

    #[test]
    fn id_lists_skip_garbage_entries() {
        let filter = FilmFilter::from_query_string("actor_ids=1,x,3,");
        assert_eq!(filter.actor_ids, vec![1, 3]);
    }

    #[test]
    fn durations_parse_with_and_without_suffix() {
        assert_eq!(FilmFilter::from_query_string("min_duration=45m").min_duration, 45);
        assert_eq!(FilmFilter::from_query_string("min_duration=45").min_duration, 45);
        assert_eq!(
            FilmFilter::from_query_string("max_duration=oops").max_duration,
            DURATION_MAX_MINUTES
        );
    }

    #[test]
    fn page_input_rejects_non_positive_values() {
        assert_eq!(
            parse_page_input("0", Some(10)),
            Err(PageInputError::NotAPositiveNumber)
        );
        assert_eq!(
            parse_page_input("-1", Some(10)),
            Err(PageInputError::NotAPositiveNumber)
        );
        assert_eq!(
            parse_page_input("три", Some(10)),
            Err(PageInputError::NotAPositiveNumber)
        );
    }

    #[test]
    fn page_input_respects_known_page_count() {
        assert_eq!(parse_page_input("5", Some(5)), Ok(5));
        assert_eq!(parse_page_input("5", Some(7)), Ok(5));
        assert_eq!(parse_page_input("6", Some(5)), Err(PageInputError::OutOfRange));
        assert_eq!(parse_page_input("42", None), Ok(42));
    }

    #[test]
    fn next_page_heuristic_uses_row_count() {
        assert!(has_next_page(9, 9));
        assert!(!has_next_page(8, 9));
        assert!(!has_next_page(0, 9));
    }

    #[test]
    fn actor_filter_round_trips() {
        let filter = ActorFilter {
            name: "Smith".to_string(),
            min_year: Some(1960),
            max_movies_count: Some(40),
            sort_by: "name".to_string(),
            order: SortOrder::Asc,
            page: 2,
            ..ActorFilter::default()
        };
        let restored = ActorFilter::from_query_string(&filter.to_query_string());
        assert_eq!(restored, filter);
    }

    #[test]
    fn actor_filter_default_is_empty() {
        assert_eq!(ActorFilter::default().to_query_string(), "");
    }
}
