pub mod airport;
pub mod flight;
pub mod location;
pub mod route_point;

#[cfg(test)]
pub(crate) mod test_utils;
