mod app;
mod form;
mod presentation;
mod support;
