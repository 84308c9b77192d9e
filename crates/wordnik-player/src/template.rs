const URL_PLACEHOLDER: &str = "{url}";

/// Player command line with `{url}` placeholders
#[derive(Debug, Clone)]
pub struct ArgsTemplate {
    args: Vec<String>,
}

impl ArgsTemplate {
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// Fill in the placeholders; the URL is appended when none is present
    pub fn render(&self, url: &str) -> Vec<String> {
        let mut rendered: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(URL_PLACEHOLDER, url))
            .collect();

        if !self.args.iter().any(|arg| arg.contains(URL_PLACEHOLDER)) {
            rendered.push(url.to_string());
        }

        rendered
    }
}
