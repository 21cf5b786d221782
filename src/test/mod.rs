mod test_levels;
mod test_session;
