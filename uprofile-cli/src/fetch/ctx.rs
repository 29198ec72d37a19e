use derive_builder::Builder;

pub trait Context<'a> {
    fn user_id(&self) -> &'a str;
    /// Base url of the profile API.
    ///
    /// Example: https://profiles.example.com
    fn api_base_url(&self) -> &'a str;
}

#[derive(Clone, Builder, PartialEq, Eq, Default)]
pub struct Args {
    user_id: String,
    api_base_url: String,
}

impl Args {
    pub fn builder() -> ArgsBuilder {
        ArgsBuilder::default()
    }
}

impl<'a> Context<'a> for &'a Args {
    fn user_id(&self) -> &'a str {
        &self.user_id
    }

    fn api_base_url(&self) -> &'a str {
        &self.api_base_url
    }
}
