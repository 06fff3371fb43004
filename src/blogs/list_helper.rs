//! Aggregations over an in-memory list of blogs.
//!
//! Ties always go to whatever was seen first in input order. Like sums are
//! widened to `i128` so any list of valid blogs adds up exactly.

use std::ops::AddAssign;

use serde::Serialize;

use super::repo::Blog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorCount {
    pub author: String,
    pub blogs: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: i128,
}

pub fn total_likes(blogs: &[Blog]) -> i128 {
    blogs.iter().map(|blog| i128::from(blog.likes)).sum()
}

pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None, |best, blog| match best {
        Some(current) if current.likes >= blog.likes => Some(current),
        _ => Some(blog),
    })
}

pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorCount> {
    leader(tally(blogs, |_| 1_usize)).map(|(author, blogs)| AuthorCount {
        author: author.to_string(),
        blogs,
    })
}

pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    leader(tally(blogs, |blog| i128::from(blog.likes))).map(|(author, likes)| AuthorLikes {
        author: author.to_string(),
        likes,
    })
}

/// Per-author totals in first-seen order.
fn tally<T, F>(blogs: &[Blog], weight: F) -> Vec<(&str, T)>
where
    T: AddAssign,
    F: Fn(&Blog) -> T,
{
    let mut totals: Vec<(&str, T)> = Vec::new();
    for blog in blogs {
        match totals.iter_mut().find(|(author, _)| *author == blog.author) {
            Some((_, total)) => *total += weight(blog),
            None => totals.push((blog.author.as_str(), weight(blog))),
        }
    }
    totals
}

fn leader<T: PartialOrd>(totals: Vec<(&str, T)>) -> Option<(&str, T)> {
    totals.into_iter().fold(None, |best, (author, total)| match best {
        Some((best_author, best_total)) if best_total >= total => Some((best_author, best_total)),
        _ => Some((author, total)),
    })
}
