use crate::catalog::Catalog;
use crate::model::Movie;
use crate::panel::{FormParams, Panel};
use log::{debug, warn};
use serde::Serialize;

pub const NO_MOVIES: &str = "No movies found.";
pub const DETAILS_FAILED: &str = "Error loading details";

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Listing {
    Idle,
    Invalid { message: String },
    Failed { message: String },
    Empty { message: String },
    Movies { cards: Vec<Card> },
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u64,
    pub title: String,
    pub genres: String,
    pub avg_rating: Option<String>,
    pub rating_count: Option<u64>,
    pub similarity: Option<String>,
    pub top_tags: Vec<String>,
    pub details_url: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Details {
    Shown {
        id: u64,
        tags: Vec<String>,
        graph_url: String,
    },
    Failed {
        id: u64,
        message: String,
    },
}

impl From<Movie> for Card {
    fn from(movie: Movie) -> Self {
        Card {
            id: movie.id,
            title: movie.title,
            genres: movie.genres.join(", "),
            // Zero reads the same as a missing aggregate.
            avg_rating: movie
                .avg_rating
                .filter(|r| *r != 0.0)
                .map(|r| format!("{:.2}", r)),
            rating_count: movie.rating_count.filter(|c| *c != 0),
            similarity: movie.total_similarity.map(|s| format!("{:.2}", s)),
            top_tags: movie
                .tags
                .into_iter()
                .map(|t| t.tag)
                .filter(|t| !t.is_empty())
                .collect(),
            details_url: details_url(movie.id),
        }
    }
}

pub fn details_url(movie_id: u64) -> String {
    format!("/movies/{}/details", movie_id)
}

pub fn graph_url(movie_id: u64) -> String {
    format!("/movies/{}/review-graph", movie_id)
}

pub async fn fetch_listing<C: Catalog>(catalog: &C, panel: Panel, form: &FormParams) -> Listing {
    let request = match panel.request(form) {
        Ok(request) => request,
        Err(invalid) => {
            return Listing::Invalid {
                message: invalid.0.to_owned(),
            }
        }
    };
    let movies = match catalog.movies(&request).await {
        Ok(movies) => movies,
        Err(err) => {
            warn!("{} listing failed: {}", panel.slug(), err);
            return Listing::Failed {
                message: panel.failure_message().to_owned(),
            };
        }
    };
    debug!("{} listing returned {} movies", panel.slug(), movies.len());
    if movies.is_empty() {
        return Listing::Empty {
            message: NO_MOVIES.to_owned(),
        };
    }
    Listing::Movies {
        cards: movies.into_iter().map(Card::from).collect(),
    }
}

/// Loaded when a card's details are opened. Only the tags are fetched here;
/// the graph is requested by the browser through `graph_url`.
pub async fn fetch_details<C: Catalog>(catalog: &C, movie_id: u64) -> Details {
    match catalog.tags(movie_id).await {
        Ok(tags) => Details::Shown {
            id: movie_id,
            tags: tags
                .into_iter()
                .map(|t| t.tag)
                .filter(|t| !t.is_empty())
                .collect(),
            graph_url: graph_url(movie_id),
        },
        Err(err) => {
            warn!("details for movie {} failed: {}", movie_id, err);
            Details::Failed {
                id: movie_id,
                message: DETAILS_FAILED.to_owned(),
            }
        }
    }
}
