use crate::data::guild_config::GuildConfigRepository;
use crate::model::guild_config::UpdateGuildConfigParam;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_lang;
mod insert_default;
mod update;
