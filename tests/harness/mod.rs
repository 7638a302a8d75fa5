#![allow(dead_code)]

pub mod recording_notifier;
pub mod scripted_pages;
pub mod temp_store;
