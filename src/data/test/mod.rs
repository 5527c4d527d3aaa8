mod guild_config;
mod invite;
mod premium;
