mod images_endpoint;

pub use images_endpoint::{EndpointBody, EndpointResponse, ImagesEndpoint};
