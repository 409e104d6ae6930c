mod create_link;
mod get_link;
mod get_link_analytics;
mod list_links;
mod set_link_status;

use lynqr::model::link::LinkFormDto;

use super::*;

fn link_form(title: &str, url: &str) -> LinkFormDto {
    LinkFormDto {
        title: title.to_string(),
        url: url.to_string(),
        icon: Some("github".to_string()),
        description: None,
    }
}
