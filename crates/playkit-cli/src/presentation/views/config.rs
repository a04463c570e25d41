use std::fmt;

use crate::presentation::view_models::ConfigViewModel;

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.exists {
            writeln!(f, "# {}", self.data.path.display())?;
        } else {
            writeln!(f, "# {} (not found, showing defaults)", self.data.path.display())?;
        }

        let body = toml::to_string_pretty(&self.data.config).map_err(|_| fmt::Error)?;
        write!(f, "{}", body)
    }
}
