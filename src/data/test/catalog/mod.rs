use crate::{
    data::catalog::AchievementCatalog, error::AppError,
    model::achievement::AchievementDefinition,
};
use test_utils::{builder::TestBuilder, context::TestFile};

mod add;
mod load;
mod remove;
mod update;

fn definition(id: &str, title: &str, description: &str) -> AchievementDefinition {
    AchievementDefinition {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}
