/// Query parameter value that hides an RSVP category.
const HIDE: &str = "hide";

/// Event list filters taken from the page's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilters {
    /// Only show events of these types. `None` shows every type.
    pub event_types: Option<Vec<String>>,
    /// Show events the viewer RSVP'd to.
    pub rsvpd: bool,
    /// Show events the viewer has not RSVP'd to.
    pub not_rsvpd: bool,
}

impl Default for EventFilters {
    fn default() -> Self {
        Self {
            event_types: None,
            rsvpd: true,
            not_rsvpd: true,
        }
    }
}

impl EventFilters {
    /// ## Summary
    /// Parses raw query values.
    ///
    /// `event_types` is a comma-separated list of type names; an absent or empty
    /// value means no filter. The RSVP flags stay on unless the value is `hide`.
    #[must_use]
    pub fn from_query_values(
        event_types: Option<&str>,
        rsvpd: Option<&str>,
        not_rsvpd: Option<&str>,
    ) -> Self {
        let event_types = event_types
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|names| !names.is_empty());

        Self {
            event_types,
            rsvpd: rsvpd != Some(HIDE),
            not_rsvpd: not_rsvpd != Some(HIDE),
        }
    }

    /// Parses the `event_types`, `rsvpd` and `not_rsvpd` query parameters.
    #[must_use]
    pub fn from_request(req: &salvo::Request) -> Self {
        let event_types = req.query::<String>("event_types");
        let rsvpd = req.query::<String>("rsvpd");
        let not_rsvpd = req.query::<String>("not_rsvpd");

        Self::from_query_values(
            event_types.as_deref(),
            rsvpd.as_deref(),
            not_rsvpd.as_deref(),
        )
    }
}
