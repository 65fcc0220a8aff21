//! Caller-tunable request parameters.

use std::fmt;

/// Unit system for measurements in the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Metric => write!(f, "metric"),
            Units::Imperial => write!(f, "imperial"),
        }
    }
}

/// Location override for geo-dependent queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl fmt::Display for LatLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.long)
    }
}

/// Options for a full-results query. The default asks for nothing
/// extra; the client then requests plaintext format on its own.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    /// Output formats to request, joined with commas on the wire,
    /// e.g. `["plaintext", "image"]`.
    pub formats: Vec<String>,
    pub units: Option<Units>,
    pub latlong: Option<LatLong>,
    /// Seconds the scanners may spend before the service gives up.
    pub scantimeout: Option<f64>,
    /// Seconds any single pod may spend.
    pub podtimeout: Option<f64>,
    /// Passed through verbatim, after the named options.
    pub extra: Vec<(String, String)>,
}

impl QueryParams {
    /// Render to wire key/value pairs.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if !self.formats.is_empty() {
            out.push(("format".to_owned(), self.formats.join(",")));
        }
        if let Some(units) = self.units {
            out.push(("units".to_owned(), units.to_string()));
        }
        if let Some(latlong) = self.latlong {
            out.push(("latlong".to_owned(), latlong.to_string()));
        }
        if let Some(timeout) = self.scantimeout {
            out.push(("scantimeout".to_owned(), timeout.to_string()));
        }
        if let Some(timeout) = self.podtimeout {
            out.push(("podtimeout".to_owned(), timeout.to_string()));
        }
        out.extend(self.extra.iter().cloned());
        out
    }
}

/// Options for one conversational turn. A fresh dialogue leaves
/// everything unset; follow-up turns echo back the id, host, and `s`
/// marker the previous turn returned.
#[derive(Debug, Clone, Default)]
pub struct ConversationalParams {
    pub conversation_id: Option<String>,
    /// Follow-up marker some answers return; echo it back verbatim.
    pub s: Option<i64>,
    /// Caller ip, forwarded so location answers fit the end user.
    pub ip: Option<String>,
    pub units: Option<Units>,
    /// Host the previous turn said to use. Routed to instead of the
    /// client's base URL; never sent as a parameter.
    pub host: Option<String>,
}

impl ConversationalParams {
    /// Render to wire key/value pairs. `host` is routing, not a pair.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if let Some(id) = &self.conversation_id {
            out.push(("conversationid".to_owned(), id.clone()));
        }
        if let Some(s) = self.s {
            out.push(("s".to_owned(), s.to_string()));
        }
        if let Some(ip) = &self.ip {
            out.push(("ip".to_owned(), ip.clone()));
        }
        if let Some(units) = self.units {
            out.push(("units".to_owned(), units.to_string()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_render_in_order() {
        let params = QueryParams {
            formats: vec!["plaintext".to_owned(), "image".to_owned()],
            units: Some(Units::Metric),
            latlong: Some(LatLong {
                lat: 40.42,
                long: -3.71,
            }),
            scantimeout: Some(8.0),
            podtimeout: None,
            extra: vec![("podstate".to_owned(), "More digits".to_owned())],
        };
        assert_eq!(
            params.pairs(),
            vec![
                ("format".to_owned(), "plaintext,image".to_owned()),
                ("units".to_owned(), "metric".to_owned()),
                ("latlong".to_owned(), "40.42,-3.71".to_owned()),
                ("scantimeout".to_owned(), "8".to_owned()),
                ("podstate".to_owned(), "More digits".to_owned()),
            ]
        );
    }

    #[test]
    fn default_query_params_render_empty() {
        assert!(QueryParams::default().pairs().is_empty());
    }

    #[test]
    fn conversational_params_skip_host() {
        let params = ConversationalParams {
            conversation_id: Some("MSP420".to_owned()),
            s: Some(3),
            ip: None,
            units: Some(Units::Imperial),
            host: Some("www6b3.wolframalpha.com".to_owned()),
        };
        assert_eq!(
            params.pairs(),
            vec![
                ("conversationid".to_owned(), "MSP420".to_owned()),
                ("s".to_owned(), "3".to_owned()),
                ("units".to_owned(), "imperial".to_owned()),
            ]
        );
    }
}
