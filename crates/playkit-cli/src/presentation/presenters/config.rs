use std::path::Path;

use crate::config::Config;
use crate::presentation::view_models::{CommandResultViewModel, ConfigViewModel, Guidance};

pub fn present_config(path: &Path, config: Config) -> CommandResultViewModel<ConfigViewModel> {
    let exists = path.exists();
    let content = ConfigViewModel {
        path: path.to_path_buf(),
        exists,
        config,
    };

    let mut result = CommandResultViewModel::new(content);
    if !exists {
        result = result.with_suggestion(
            Guidance::new("Create a config file with these defaults")
                .with_command("playkit config init"),
        );
    }
    result
}
