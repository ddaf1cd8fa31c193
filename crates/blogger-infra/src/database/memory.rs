//! In-memory document store - used when no database is configured.
//!
//! Documents keep insertion order, which is the natural order ties fall back
//! to when sorting. Data is lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogger_core::domain::{Blog, Comment, Post, User};
use blogger_core::error::RepoError;
use blogger_core::pagination::{PageRequest, SortDirection};
use blogger_core::ports::{
    BaseRepository, BlogFilter, BlogRepository, CommentFilter, CommentRepository, PostFilter,
    PostRepository, Sortable, UserFilter, UserRepository,
};

/// An entity addressable by ID.
pub trait Document: Sortable + Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
}

impl Document for Blog {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Document for Post {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Document for Comment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Document for User {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Generic in-memory collection guarded by an async RwLock.
pub struct InMemoryRepository<T> {
    documents: RwLock<Vec<T>>,
}

pub type InMemoryBlogRepository = InMemoryRepository<Blog>;
pub type InMemoryPostRepository = InMemoryRepository<Post>;
pub type InMemoryCommentRepository = InMemoryRepository<Comment>;
pub type InMemoryUserRepository = InMemoryRepository<User>;

impl<T: Document> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    async fn count_where(&self, predicate: impl Fn(&T) -> bool) -> u64 {
        let documents = self.documents.read().await;
        documents.iter().filter(|d| predicate(d)).count() as u64
    }

    async fn find_where(&self, predicate: impl Fn(&T) -> bool, page: &PageRequest) -> Vec<T> {
        let documents = self.documents.read().await;
        let mut matched: Vec<&T> = documents.iter().filter(|d| predicate(d)).collect();

        let field = page.sort.field.as_str();
        matched.sort_by(|a, b| {
            let ordering = a.sort_value(field).cmp(&b.sort_value(field));
            match page.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });

        matched
            .into_iter()
            .skip(usize::try_from(page.skip).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit).unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    async fn find_first(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        let documents = self.documents.read().await;
        documents.iter().find(|d| predicate(d)).cloned()
    }
}

impl<T: Document> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Document> BaseRepository<T, Uuid> for InMemoryRepository<T> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        Ok(self.find_first(|d| d.id() == id).await)
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|d| d.id() == entity.id()) {
            Some(slot) => *slot = entity.clone(),
            None => documents.push(entity.clone()),
        }
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut documents = self.documents.write().await;
        let position = documents
            .iter()
            .position(|d| d.id() == id)
            .ok_or(RepoError::NotFound)?;
        documents.remove(position);
        Ok(())
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn count(&self, filter: &BlogFilter) -> Result<u64, RepoError> {
        Ok(self.count_where(|b| filter.matches(b)).await)
    }

    async fn find_many(
        &self,
        filter: &BlogFilter,
        page: &PageRequest,
    ) -> Result<Vec<Blog>, RepoError> {
        Ok(self.find_where(|b| filter.matches(b), page).await)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn count(&self, filter: &PostFilter) -> Result<u64, RepoError> {
        Ok(self.count_where(|p| filter.matches(p)).await)
    }

    async fn find_many(
        &self,
        filter: &PostFilter,
        page: &PageRequest,
    ) -> Result<Vec<Post>, RepoError> {
        Ok(self.find_where(|p| filter.matches(p), page).await)
    }

    async fn rename_blog(&self, blog_id: Uuid, blog_name: &str) -> Result<u64, RepoError> {
        let mut documents = self.documents.write().await;
        let mut touched = 0;
        for post in documents.iter_mut().filter(|p| p.blog_id == blog_id) {
            post.blog_name = blog_name.to_string();
            touched += 1;
        }
        Ok(touched)
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn count(&self, filter: &CommentFilter) -> Result<u64, RepoError> {
        Ok(self.count_where(|c| filter.matches(c)).await)
    }

    async fn find_many(
        &self,
        filter: &CommentFilter,
        page: &PageRequest,
    ) -> Result<Vec<Comment>, RepoError> {
        Ok(self.find_where(|c| filter.matches(c), page).await)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self.find_first(|u| u.email == email).await)
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>, RepoError> {
        Ok(self.find_first(|u| u.login == login).await)
    }

    async fn count(&self, filter: &UserFilter) -> Result<u64, RepoError> {
        Ok(self.count_where(|u| filter.matches(u)).await)
    }

    async fn find_many(
        &self,
        filter: &UserFilter,
        page: &PageRequest,
    ) -> Result<Vec<User>, RepoError> {
        Ok(self.find_where(|u| filter.matches(u), page).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogger_core::domain::{BlogData, PostData};
    use blogger_core::pagination::SortBy;

    fn blog(name: &str) -> Blog {
        Blog::new(BlogData {
            name: name.to_string(),
            description: String::new(),
            website_url: "https://example.com".to_string(),
        })
    }

    fn page(field: &str, direction: SortDirection, skip: u64, limit: u64) -> PageRequest {
        PageRequest {
            skip,
            limit,
            sort: SortBy {
                field: field.to_string(),
                direction,
            },
        }
    }

    #[tokio::test]
    async fn test_save_replaces_by_id() {
        let repo = InMemoryBlogRepository::new();
        let mut b = blog("First");
        repo.save(b.clone()).await.unwrap();

        b.name = "Renamed".to_string();
        repo.save(b.clone()).await.unwrap();

        assert_eq!(repo.count(&BlogFilter::default()).await.unwrap(), 1);
        assert_eq!(repo.find_by_id(b.id).await.unwrap().unwrap().name, "Renamed");
    }

    #[tokio::test]
    async fn test_delete_is_permanent() {
        let repo = InMemoryBlogRepository::new();
        let b = repo.save(blog("Gone")).await.unwrap();

        repo.delete(b.id).await.unwrap();

        assert!(repo.find_by_id(b.id).await.unwrap().is_none());
        assert!(matches!(repo.delete(b.id).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_many_sorts_and_pages() {
        let repo = InMemoryBlogRepository::new();
        for name in ["b", "d", "a", "c"] {
            repo.save(blog(name)).await.unwrap();
        }

        let names = |blogs: Vec<Blog>| blogs.into_iter().map(|b| b.name).collect::<Vec<_>>();
        let filter = BlogFilter::default();

        let asc = repo
            .find_many(&filter, &page("name", SortDirection::Asc, 1, 2))
            .await
            .unwrap();
        assert_eq!(names(asc), vec!["b", "c"]);

        let desc = repo
            .find_many(&filter, &page("name", SortDirection::Desc, 0, 10))
            .await
            .unwrap();
        assert_eq!(names(desc), vec!["d", "c", "b", "a"]);
    }

    #[tokio::test]
    async fn test_rename_blog_touches_only_that_blog() {
        let repo = InMemoryPostRepository::new();
        let blog_id = Uuid::new_v4();
        let other_id = Uuid::new_v4();
        for (id, name) in [(blog_id, "Old"), (blog_id, "Old"), (other_id, "Other")] {
            repo.save(Post::new(PostData {
                title: "t".to_string(),
                short_description: "s".to_string(),
                content: "c".to_string(),
                blog_id: id,
                blog_name: name.to_string(),
            }))
            .await
            .unwrap();
        }

        assert_eq!(repo.rename_blog(blog_id, "New").await.unwrap(), 2);

        let all = repo
            .find_many(&PostFilter::default(), &page("blogName", SortDirection::Asc, 0, 10))
            .await
            .unwrap();
        let names: Vec<&str> = all.iter().map(|p| p.blog_name.as_str()).collect();
        assert_eq!(names, vec!["New", "New", "Other"]);
    }
}
