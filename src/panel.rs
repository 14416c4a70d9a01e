use crate::catalog::ListingRequest;
use crate::model::StarRating;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Search,
    TopRated,
    TopYear,
    Similar,
    TopMonth,
    Recommend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invalid(pub &'static str);

impl Panel {
    pub const ALL: [Panel; 6] = [
        Panel::Search,
        Panel::TopRated,
        Panel::TopYear,
        Panel::Similar,
        Panel::TopMonth,
        Panel::Recommend,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Panel::Search => "search",
            Panel::TopRated => "top-rated",
            Panel::TopYear => "top-year",
            Panel::Similar => "similar",
            Panel::TopMonth => "top-month",
            Panel::Recommend => "recommend",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Panel::ALL.iter().copied().find(|p| p.slug() == slug)
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Search => "Search",
            Panel::TopRated => "Top Rated",
            Panel::TopYear => "Top by Year Range",
            Panel::Similar => "Similar Movies",
            Panel::TopMonth => "Top Movies per Month",
            Panel::Recommend => "Recommend by Genres",
        }
    }

    pub fn results_id(self) -> &'static str {
        match self {
            Panel::Search => "search-results",
            Panel::TopRated => "top-rated-results",
            Panel::TopYear => "top-year-results",
            Panel::Similar => "similar-results",
            Panel::TopMonth => "month-top-results",
            Panel::Recommend => "recommend-genres-results",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Panel::Search => "Error searching movies",
            Panel::TopRated => "Error fetching top rated movies",
            Panel::TopYear => "Error fetching top movies by year range",
            Panel::Similar => "Error fetching similar movies.",
            Panel::TopMonth => "Error fetching top movies for the selected month",
            Panel::Recommend => "Error fetching recommendations for selected genres",
        }
    }

    fn endpoint(self) -> &'static str {
        match self {
            Panel::Search => "api/movies/search",
            Panel::TopRated => "api/movies/top-rated",
            Panel::TopYear => "api/movies/top-year-range",
            Panel::Similar => "api/movies/similar",
            Panel::TopMonth => "api/movies/top-month",
            Panel::Recommend => "api/movies/recommend",
        }
    }

    pub fn request(self, form: &FormParams) -> Result<ListingRequest, Invalid> {
        let params = match self {
            Panel::Search => {
                let query = form.get("query");
                if query.is_empty() {
                    return Err(Invalid("Please enter a search term"));
                }
                vec![("query", query.to_owned())]
            }
            Panel::TopRated => {
                let mut params = vec![("genre", form.get("genre").to_owned())];
                // The API falls back to 100 when the minimum is missing.
                if let Ok(min) = form.get("min_ratings").parse::<u32>() {
                    params.push(("min_ratings", min.to_string()));
                }
                params
            }
            Panel::TopYear => {
                let (start, end) = match (
                    form.get("start_year").parse::<u32>(),
                    form.get("end_year").parse::<u32>(),
                ) {
                    (Ok(start), Ok(end)) => (start, end),
                    _ => return Err(Invalid("Please enter valid start and end years.")),
                };
                if start > end {
                    return Err(Invalid("Start year cannot be greater than end year."));
                }
                vec![
                    ("start_year", start.to_string()),
                    ("end_year", end.to_string()),
                ]
            }
            Panel::Similar => {
                let movie = form.get("movie");
                if movie.is_empty() {
                    return Err(Invalid("Please enter a base movie title."));
                }
                vec![
                    ("movie", movie.to_owned()),
                    ("rating", form.rating().value().to_string()),
                ]
            }
            Panel::TopMonth => match form.get("month").parse::<u8>() {
                Ok(month) if (1..=12).contains(&month) => vec![("month", month.to_string())],
                _ => return Err(Invalid("Please select a month.")),
            },
            Panel::Recommend => {
                let genres = form.all("genres");
                if genres.is_empty() {
                    return Err(Invalid("Please select at least one genre."));
                }
                vec![("genres", genres.join(","))]
            }
        };
        Ok(ListingRequest {
            endpoint: self.endpoint(),
            params,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams(Vec<(String, String)>);

impl From<Vec<(String, String)>> for FormParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        FormParams(pairs)
    }
}

impl FormParams {
    pub fn get(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .unwrap_or("")
    }

    pub fn all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .collect()
    }

    pub fn rating(&self) -> StarRating {
        StarRating::parse(self.get("rating"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> FormParams {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn slugs_round_trip() {
        for panel in Panel::ALL.iter() {
            assert_eq!(Panel::from_slug(panel.slug()), Some(*panel));
        }
        assert_eq!(Panel::from_slug("movies"), None);
    }

    #[test]
    fn search_requires_a_term() {
        assert_eq!(
            Panel::Search.request(&form(&[("query", "   ")])),
            Err(Invalid("Please enter a search term"))
        );
        let request = Panel::Search.request(&form(&[("query", " heat ")])).unwrap();
        assert_eq!(request.endpoint, "api/movies/search");
        assert_eq!(request.params, vec![("query", "heat".to_owned())]);
    }

    #[test]
    fn top_rated_drops_bad_minimum() {
        let request = Panel::TopRated
            .request(&form(&[("genre", "Comedy"), ("min_ratings", "lots")]))
            .unwrap();
        assert_eq!(request.params, vec![("genre", "Comedy".to_owned())]);

        let request = Panel::TopRated
            .request(&form(&[("genre", ""), ("min_ratings", "250")]))
            .unwrap();
        assert_eq!(
            request.params,
            vec![("genre", String::new()), ("min_ratings", "250".to_owned())]
        );
    }

    #[test]
    fn year_range_is_checked() {
        assert_eq!(
            Panel::TopYear.request(&form(&[("start_year", "1990")])),
            Err(Invalid("Please enter valid start and end years."))
        );
        assert_eq!(
            Panel::TopYear.request(&form(&[("start_year", "199x"), ("end_year", "2000")])),
            Err(Invalid("Please enter valid start and end years."))
        );
        assert_eq!(
            Panel::TopYear.request(&form(&[("start_year", "2001"), ("end_year", "2000")])),
            Err(Invalid("Start year cannot be greater than end year."))
        );
        let request = Panel::TopYear
            .request(&form(&[("start_year", "1995"), ("end_year", "1995")]))
            .unwrap();
        assert_eq!(request.endpoint, "api/movies/top-year-range");
        assert_eq!(
            request.params,
            vec![
                ("start_year", "1995".to_owned()),
                ("end_year", "1995".to_owned())
            ]
        );
    }

    #[test]
    fn similar_sends_star_count() {
        assert_eq!(
            Panel::Similar.request(&form(&[("rating", "4")])),
            Err(Invalid("Please enter a base movie title."))
        );
        let request = Panel::Similar
            .request(&form(&[("movie", "Alien"), ("rating", "4")]))
            .unwrap();
        assert_eq!(
            request.params,
            vec![("movie", "Alien".to_owned()), ("rating", "4".to_owned())]
        );
        let request = Panel::Similar.request(&form(&[("movie", "Alien")])).unwrap();
        assert_eq!(request.params[1], ("rating", "0".to_owned()));
    }

    #[test]
    fn month_must_be_in_range() {
        for bad in &["", "0", "13", "may"] {
            assert_eq!(
                Panel::TopMonth.request(&form(&[("month", *bad)])),
                Err(Invalid("Please select a month."))
            );
        }
        let request = Panel::TopMonth.request(&form(&[("month", "12")])).unwrap();
        assert_eq!(request.params, vec![("month", "12".to_owned())]);
    }

    #[test]
    fn recommend_joins_checked_genres() {
        assert_eq!(
            Panel::Recommend.request(&form(&[])),
            Err(Invalid("Please select at least one genre."))
        );
        let request = Panel::Recommend
            .request(&form(&[("genres", "Horror"), ("genres", "Sci-Fi")]))
            .unwrap();
        assert_eq!(request.endpoint, "api/movies/recommend");
        assert_eq!(request.params, vec![("genres", "Horror,Sci-Fi".to_owned())]);
    }
}
