use crate::listing::{Details, Listing};
use crate::model::StarRating;
use crate::panel::{FormParams, Panel};
use serde::Serialize;

pub const GENRES: [&str; 19] = [
    "Action",
    "Adventure",
    "Animation",
    "Children",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Fantasy",
    "Film-Noir",
    "Horror",
    "IMAX",
    "Musical",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Thriller",
    "War",
    "Western",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Serialize, Debug)]
pub struct Tab {
    pub slug: &'static str,
    pub label: &'static str,
    pub content_id: String,
    pub active: bool,
}

pub fn tabs(active: Panel) -> Vec<Tab> {
    Panel::ALL
        .iter()
        .map(|&panel| Tab {
            slug: panel.slug(),
            label: panel.label(),
            content_id: format!("{}-tab", panel.slug()),
            active: panel == active,
        })
        .collect()
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub value: u8,
    pub lit: bool,
    pub checked: bool,
}

#[derive(Serialize, Debug)]
pub struct StarWidget {
    pub stars: Vec<Star>,
}

impl StarWidget {
    pub fn new(rating: StarRating) -> Self {
        StarWidget {
            stars: (1..=StarRating::MAX)
                .map(|value| Star {
                    value,
                    lit: value <= rating.value(),
                    checked: value == rating.value(),
                })
                .collect(),
        }
    }

    pub fn rating(&self) -> StarRating {
        let lit = self.stars.iter().filter(|s| s.lit).count() as u8;
        StarRating::new(lit).unwrap_or_default()
    }
}

#[derive(Serialize, Debug)]
pub struct Choice {
    pub value: String,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Serialize, Debug)]
struct Fields<'a> {
    query: &'a str,
    genre: &'a str,
    min_ratings: &'a str,
    start_year: &'a str,
    end_year: &'a str,
    movie: &'a str,
}

#[derive(Serialize, Debug)]
pub struct Page<'a> {
    tabs: Vec<Tab>,
    fields: Fields<'a>,
    genre_options: Vec<Choice>,
    genre_checks: Vec<Choice>,
    months: Vec<Choice>,
    stars: StarWidget,
    rating: u8,
    results_id: &'static str,
    listing: Listing,
}

impl<'a> Page<'a> {
    pub fn new(active: Panel, form: &'a FormParams, listing: Listing) -> Self {
        let genre = form.get("genre");
        let checked = form.all("genres");
        let month = form.get("month");
        let stars = StarWidget::new(form.rating());
        let min_ratings = match form.get("min_ratings") {
            "" => "100",
            value => value,
        };
        Page {
            tabs: tabs(active),
            fields: Fields {
                query: form.get("query"),
                genre,
                min_ratings,
                start_year: form.get("start_year"),
                end_year: form.get("end_year"),
                movie: form.get("movie"),
            },
            genre_options: GENRES
                .iter()
                .map(|&g| Choice {
                    value: g.to_owned(),
                    label: g,
                    selected: g == genre,
                })
                .collect(),
            genre_checks: GENRES
                .iter()
                .map(|&g| Choice {
                    value: g.to_owned(),
                    label: g,
                    selected: checked.contains(&g),
                })
                .collect(),
            months: MONTHS
                .iter()
                .enumerate()
                .map(|(i, &name)| {
                    let value = (i + 1).to_string();
                    Choice {
                        selected: value == month,
                        value,
                        label: name,
                    }
                })
                .collect(),
            rating: stars.rating().value(),
            stars,
            results_id: active.results_id(),
            listing,
        }
    }

    pub fn render(&self, tera: &tera::Tera) -> tera::Result<String> {
        let ctx = tera::Context::from_serialize(self)?;
        tera.render("index.html", &ctx)
    }
}

pub fn render_details(tera: &tera::Tera, details: &Details) -> tera::Result<String> {
    let mut ctx = tera::Context::new();
    ctx.insert("details", details);
    tera.render("details.html", &ctx)
}
