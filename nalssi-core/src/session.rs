use crate::{
    model::{CityQuery, WeatherReport},
    provider::{FetchError, WeatherProvider},
};

/// What the interface is currently showing.
///
/// The city label and the report travel together in the `Showing`
/// payload: a transition installs both or clears both, so a rendered
/// label can never belong to a different fetch than the metrics next
/// to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    /// Nothing fetched yet, or the last submission failed.
    #[default]
    Idle,
    /// The last submission succeeded.
    Showing { city: String, report: WeatherReport },
}

impl Session {
    /// Handle one submission from the user.
    ///
    /// A blank input never reaches the provider. Any failure resets to
    /// `Idle`; the error is returned for the caller to surface, and the
    /// flow stays re-enterable.
    pub async fn submit(
        &mut self,
        provider: &dyn WeatherProvider,
        input: &str,
    ) -> Result<(), FetchError> {
        let query = CityQuery::new(input);
        if query.is_empty() {
            *self = Self::Idle;
            return Err(FetchError::EmptyQuery);
        }

        match provider.fetch(&query).await {
            Ok(report) => {
                *self = Self::Showing { city: query.display_name().to_string(), report };
                Ok(())
            }
            Err(err) => {
                *self = Self::Idle;
                Err(err)
            }
        }
    }
}
