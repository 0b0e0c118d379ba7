use std::fs;
use std::io;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use catalog_client::models::{
    ActorFilter, Film, FilmFilter, SignInRequest, SortField, SortOrder,
};
use catalog_client::{CatalogClient, CatalogClientError};
use clap::{Parser, Subcommand};

const TOKEN_FILE: &str = ".catalog_token";
const DEFAULT_SERVER: &str = "http://127.0.0.1:8080/v1";

#[derive(Debug, Parser)]
#[command(name = "catalog-cli", version, about = "CLI клиент каталога фильмов")]
struct Cli {
    /// Адрес API каталога.
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Вход по email и паролю.
    SignIn {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Выход и сброс сохранённого токена.
    Logout,
    /// Профиль текущего пользователя (требует токен).
    Profile,
    /// Список фильмов с фильтрами.
    Films {
        /// Идентификаторы жанров через запятую.
        #[arg(long, value_delimiter = ',')]
        genre_ids: Vec<u32>,
        #[arg(long)]
        producer: Option<String>,
        #[arg(long)]
        min_rating: Option<u8>,
        #[arg(long)]
        max_rating: Option<u8>,
        /// Поле сортировки: avg_rating, release_date или runtime.
        #[arg(long)]
        sort_by: Option<String>,
        /// Направление сортировки: asc или desc.
        #[arg(long)]
        order: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 9)]
        page_size: u32,
    },
    /// Полнотекстовый поиск фильмов.
    SearchFilms {
        #[arg(long)]
        query: String,
    },
    /// Фильм по идентификатору.
    Film {
        #[arg(long)]
        id: u32,
    },
    /// Список актёров.
    Actors {
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 9)]
        page_size: u32,
    },
    /// Отзывы на фильм.
    Reviews {
        #[arg(long)]
        film_id: u32,
    },
    /// Удаление фильма через админку (требует токен администратора).
    AdminDeleteFilm {
        #[arg(long, value_delimiter = ',')]
        ids: Vec<u32>,
    },
    /// Удаление отзыва через админку (требует токен администратора).
    AdminDeleteReview {
        #[arg(long)]
        id: u32,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Ошибка: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let server = normalize_server(cli.server.unwrap_or_else(|| DEFAULT_SERVER.to_string()));
    let client = CatalogClient::new(server);

    if let Some(token) = load_token().context("не удалось прочитать .catalog_token")? {
        client.set_token(token);
    }

    match cli.command {
        Command::SignIn { email, password } => {
            client
                .sign_in(&SignInRequest { email, password })
                .await
                .map_err(map_client_error)?;
            persist_token(&client).context("не удалось сохранить токен")?;
            println!("Вход выполнен");
        }
        Command::Logout => {
            client.logout().await.map_err(map_client_error)?;
            clear_token().context("не удалось удалить .catalog_token")?;
            println!("Сессия завершена");
        }
        Command::Profile => {
            let profile = client.profile().await.map_err(map_client_error)?;
            println!("Профиль: {}", profile.display_name());
            if let Some(email) = profile.email {
                println!("  email: {email}");
            }
            println!("  админ: {}", if profile.is_admin { "да" } else { "нет" });
        }
        Command::Films {
            genre_ids,
            producer,
            min_rating,
            max_rating,
            sort_by,
            order,
            page,
            page_size,
        } => {
            let mut filter = FilmFilter {
                genre_ids,
                page,
                page_size,
                ..FilmFilter::default()
            };
            if let Some(producer) = producer {
                filter.producer = producer;
            }
            if let Some(min_rating) = min_rating {
                filter.min_rating = min_rating;
            }
            if let Some(max_rating) = max_rating {
                filter.max_rating = max_rating;
            }
            if let Some(sort_by) = sort_by {
                filter.sort_by = Some(
                    SortField::parse(&sort_by)
                        .context("sort_by: ожидается avg_rating, release_date или runtime")?,
                );
            }
            if let Some(order) = order {
                filter.order = SortOrder::parse(&order);
            }

            let films = client.films(&filter).await.map_err(map_client_error)?;
            print_films(&films);
        }
        Command::SearchFilms { query } => {
            let films = client
                .search_films(&query)
                .await
                .map_err(map_client_error)?;
            print_films(&films);
        }
        Command::Film { id } => {
            let film = client.film(id).await.map_err(map_client_error)?;
            print_film(&film);
        }
        Command::Actors {
            name,
            page,
            page_size,
        } => {
            let mut filter = ActorFilter {
                page,
                page_size,
                ..ActorFilter::default()
            };
            if let Some(name) = name {
                filter.name = name;
            }
            let actors = client.actors(&filter).await.map_err(map_client_error)?;
            for actor in &actors {
                println!("[{}] {}", actor.actor_id, actor.name);
            }
            println!("Всего: {}", actors.len());
        }
        Command::Reviews { film_id } => {
            let reviews = client
                .reviews_by_film(film_id)
                .await
                .map_err(map_client_error)?;
            for review in &reviews {
                println!("[{}] {}/100: {}", review.review_id, review.rating, review.review_text);
            }
            println!("Всего: {}", reviews.len());
        }
        Command::AdminDeleteFilm { ids } => {
            match ids.as_slice() {
                [] => anyhow::bail!("не передано ни одного id"),
                [id] => client.delete_film(*id).await.map_err(map_client_error)?,
                many => client.delete_films(many).await.map_err(map_client_error)?,
            }
            println!("Удалено фильмов: {}", ids.len());
        }
        Command::AdminDeleteReview { id } => {
            client
                .delete_admin_review(id)
                .await
                .map_err(map_client_error)?;
            println!("Отзыв удалён: id={id}");
        }
    }

    Ok(())
}

fn print_films(films: &[Film]) {
    for film in films {
        println!(
            "[{}] {} — рейтинг {:.0}, отзывов {}",
            film.id, film.title, film.avg_rating, film.total_reviews
        );
    }
    println!("Всего: {}", films.len());
}

fn print_film(film: &Film) {
    println!("{} ({})", film.title, film.release_date.format("%Y-%m-%d"));
    println!("  длительность: {}", film.runtime);
    println!("  продюсер: {}", film.producer);
    println!("  рейтинг: {:.0} ({} отзывов)", film.avg_rating, film.total_reviews);
    if !film.genres.is_empty() {
        let names: Vec<&str> = film.genres.iter().map(|genre| genre.name.as_str()).collect();
        println!("  жанры: {}", names.join(", "));
    }
    if !film.synopsis.is_empty() {
        println!("  {}", film.synopsis);
    }
}

fn normalize_server(server: String) -> String {
    if server.starts_with("http://") || server.starts_with("https://") {
        return server;
    }

    format!("http://{server}")
}

fn parse_token_content(raw: &str) -> Option<String> {
    let token = raw.trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(token)
}

fn load_token() -> io::Result<Option<String>> {
    if !Path::new(TOKEN_FILE).exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(TOKEN_FILE)?;
    Ok(parse_token_content(&raw))
}

fn persist_token(client: &CatalogClient) -> io::Result<()> {
    if let Some(token) = client.token() {
        fs::write(TOKEN_FILE, token)?;
    }
    Ok(())
}

fn clear_token() -> io::Result<()> {
    if Path::new(TOKEN_FILE).exists() {
        fs::remove_file(TOKEN_FILE)?;
    }
    Ok(())
}

fn map_client_error(err: CatalogClientError) -> anyhow::Error {
    let message = match err {
        CatalogClientError::Unauthorized => {
            "требуется авторизация: выполните `catalog-cli sign-in ...`".to_string()
        }
        CatalogClientError::NotFound => "ресурс не найден".to_string(),
        CatalogClientError::AlreadyExists(message) => format!("конфликт данных: {message}"),
        CatalogClientError::InvalidRequest(message) => format!("некорректный запрос: {message}"),
        CatalogClientError::Http(err) => format!("ошибка HTTP: {err}"),
    };
    anyhow::anyhow!(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_server_adds_scheme() {
        assert_eq!(
            normalize_server("localhost:8080".to_string()),
            "http://localhost:8080"
        );
        assert_eq!(
            normalize_server("https://api.example.com/v1".to_string()),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn parse_token_content_trims_and_rejects_blank() {
        assert_eq!(parse_token_content("  abc  ").as_deref(), Some("abc"));
        assert!(parse_token_content("   ").is_none());
    }
}
