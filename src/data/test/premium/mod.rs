use crate::data::premium::PremiumRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_sets;
mod grant;
mod revoke;
