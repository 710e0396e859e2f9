use super::{ActiveView, InvitationApp};

pub const SURVEY_PATH: &str = "/survey";

/// Screen addressed by a path such as `/`, `/?name=Ivan` or `/survey`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Invitation { guest_name: Option<String> },
    Survey,
}

impl Default for Route {
    fn default() -> Self {
        Route::Invitation { guest_name: None }
    }
}

impl Route {
    /// Parse a path with an optional query string. Unknown paths show the
    /// invitation.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (path, query) = match input.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (input, None),
        };

        match path.trim_end_matches('/') {
            "" => Route::Invitation {
                guest_name: query.and_then(guest_name_from_query),
            },
            p if p == SURVEY_PATH || p == SURVEY_PATH.trim_start_matches('/') => Route::Survey,
            other => {
                log::warn!("Unknown route '{}', showing the invitation", other);
                Route::default()
            }
        }
    }

    /// Path form of the route, with the guest name percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Route::Invitation { guest_name: None } => "/".to_string(),
            Route::Invitation {
                guest_name: Some(name),
            } => format!("/?name={}", urlencoding::encode(name)),
            Route::Survey => SURVEY_PATH.to_string(),
        }
    }
}

fn guest_name_from_query(query: &str) -> Option<String> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == "name")
        .and_then(|(_, value)| {
            let value = value.replace('+', " ");
            match urlencoding::decode(&value) {
                Ok(decoded) => Some(decoded.trim().to_string()),
                Err(err) => {
                    log::warn!("Ignoring undecodable guest name: {}", err);
                    None
                }
            }
        })
        .filter(|name| !name.is_empty())
}

/// Greeting line at the top of the invitation.
pub fn greeting(guest_name: Option<&str>) -> String {
    match guest_name {
        Some(name) => format!("Dear {}!", name),
        None => "Dear friends!".to_string(),
    }
}

impl InvitationApp {
    /// Push a route. The previous view is dropped, which stops its
    /// countdown timer and discards any unsent form.
    pub(super) fn navigate(&mut self, route: Route) {
        log::info!("Navigating to {}", route.path());
        self.view = ActiveView::for_route(&route, &self.config.event);
        self.route = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_without_query() {
        assert_eq!(Route::parse("/"), Route::default());
        assert_eq!(Route::parse(""), Route::default());
    }

    #[test]
    fn test_guest_name_is_decoded() {
        assert_eq!(
            Route::parse("/?name=Ivan%20Petrov"),
            Route::Invitation {
                guest_name: Some("Ivan Petrov".to_string())
            }
        );
        assert_eq!(
            Route::parse("/?lang=ru&name=Anna+Maria"),
            Route::Invitation {
                guest_name: Some("Anna Maria".to_string())
            }
        );
    }

    #[test]
    fn test_blank_guest_name_is_ignored() {
        assert_eq!(Route::parse("/?name=%20%20"), Route::default());
        assert_eq!(Route::parse("/?name"), Route::default());
    }

    #[test]
    fn test_survey_paths() {
        assert_eq!(Route::parse("/survey"), Route::Survey);
        assert_eq!(Route::parse("/survey/"), Route::Survey);
        assert_eq!(Route::parse("survey"), Route::Survey);
    }

    #[test]
    fn test_unknown_path_falls_back() {
        assert_eq!(Route::parse("/gallery"), Route::default());
    }

    #[test]
    fn test_path_round_trips_guest_name() {
        let route = Route::Invitation {
            guest_name: Some("Ivan Petrov".to_string()),
        };
        assert_eq!(route.path(), "/?name=Ivan%20Petrov");
        assert_eq!(Route::parse(&route.path()), route);
    }

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(Some("Ivan")), "Dear Ivan!");
        assert_eq!(greeting(None), "Dear friends!");
    }
}
