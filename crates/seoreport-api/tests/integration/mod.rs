mod download;
mod form_flow;
