mod end_to_end;
mod interactions;
mod properties;
