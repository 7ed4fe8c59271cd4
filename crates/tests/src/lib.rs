#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_flow_tests;

#[cfg(test)]
mod transport_tests;

#[cfg(test)]
mod chat_api_tests;

#[cfg(test)]
mod platform_tests;
