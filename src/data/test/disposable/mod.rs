use crate::{
    data::disposable::DisposableRepository, error::AppError, model::sponsor::DisposableRecord,
};
use test_utils::{builder::TestBuilder, context::TestFile};

mod rename_ckey;
mod upsert;
