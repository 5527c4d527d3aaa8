use crate::data::invite::{InviteCacheRepository, InviteStatRepository};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod cache;
mod leaderboard;
mod stat;
