//! Service-level scenarios over the in-memory store.

use std::sync::Arc;

use uuid::Uuid;

use blogger_core::DomainError;
use blogger_core::ValidationService;
use blogger_core::ports::{AuthError, BaseRepository, PasswordService, TokenService};
use blogger_core::query::{QueryBlogsRepository, QueryCommentsRepository, QueryPostsRepository};
use blogger_core::services::{
    AuthService, BlogsService, CommentsService, PostsService, UsersService,
};
use blogger_infra::{JwtConfig, JwtTokenService, Repositories};
use blogger_shared::dto::{
    BlogsQuery, CommentsQuery, CreateBlogDto, CreateCommentDto, CreateLikeDto, CreatePostDto,
    CreateUserDto, LikeStatus, LoginDto, NewPasswordDto, PasswordRecoveryDto, PostsQuery,
    SortDirection,
};

/// Reversible stand-in so tests skip the Argon2 work factor.
struct PlainPasswords;

impl PasswordService for PlainPasswords {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash == format!("plain:{password}"))
    }
}

struct App {
    blogs: BlogsService,
    posts: PostsService,
    comments: CommentsService,
    users: UsersService,
    auth: AuthService,
    blogs_query: QueryBlogsRepository,
    posts_query: QueryPostsRepository,
    comments_query: QueryCommentsRepository,
    repos: Repositories,
}

impl App {
    fn new() -> Self {
        let repos = Repositories::in_memory();
        let validation = ValidationService::new();
        let passwords: Arc<dyn PasswordService> = Arc::new(PlainPasswords);
        let tokens: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "scenario-secret".to_string(),
            recovery_secret: "scenario-recovery".to_string(),
            ..JwtConfig::default()
        }));

        Self {
            blogs: BlogsService::new(repos.blogs.clone(), repos.posts.clone(), validation),
            posts: PostsService::new(
                repos.blogs.clone(),
                repos.users.clone(),
                repos.posts.clone(),
                validation,
            ),
            comments: CommentsService::new(
                repos.comments.clone(),
                repos.posts.clone(),
                repos.users.clone(),
                validation,
            ),
            users: UsersService::new(repos.users.clone(), passwords.clone(), validation),
            auth: AuthService::new(repos.users.clone(), tokens, passwords, validation),
            blogs_query: QueryBlogsRepository::new(repos.blogs.clone()),
            posts_query: QueryPostsRepository::new(repos.posts.clone(), repos.blogs.clone()),
            comments_query: QueryCommentsRepository::new(
                repos.comments.clone(),
                repos.posts.clone(),
            ),
            repos,
        }
    }

    async fn blog(&self, name: &str) -> Uuid {
        self.blogs
            .create_blog(CreateBlogDto {
                name: name.to_string(),
                description: "A blog".to_string(),
                website_url: "https://example.com".to_string(),
            })
            .await
            .unwrap()
    }

    async fn post(&self, blog_id: Uuid, title: &str) -> Uuid {
        self.posts
            .create_post(post_dto(blog_id, title))
            .await
            .unwrap()
    }

    async fn user(&self, login: &str) -> Uuid {
        self.users
            .create_user(CreateUserDto {
                login: login.to_string(),
                password: "qwerty1".to_string(),
                email: format!("{login}@example.com"),
            })
            .await
            .unwrap()
    }
}

fn post_dto(blog_id: Uuid, title: &str) -> CreatePostDto {
    CreatePostDto {
        title: title.to_string(),
        short_description: "Short".to_string(),
        content: "Body".to_string(),
        blog_id,
    }
}

fn comment_dto(content: &str) -> CreateCommentDto {
    CreateCommentDto {
        content: content.to_string(),
    }
}

#[tokio::test]
async fn test_create_post_for_missing_blog_persists_nothing() {
    let app = App::new();
    let missing = Uuid::new_v4();

    let err = app.posts.create_post(post_dto(missing, "Hello")).await.unwrap_err();
    assert!(matches!(err, DomainError::BlogNotFound(id) if id == missing));

    let page = app
        .posts_query
        .find_all_posts(&PostsQuery::default(), None)
        .await
        .unwrap();
    assert_eq!(page.total_count, 0);
}

#[tokio::test]
async fn test_moving_post_updates_blog_name() {
    let app = App::new();
    let first = app.blog("First").await;
    let second = app.blog("Second").await;
    let post_id = app.post(first, "Hello").await;

    app.posts
        .update_post(post_id, post_dto(second, "Hello again"))
        .await
        .unwrap();

    let post = app.posts_query.find_one_post(post_id, None).await.unwrap();
    assert_eq!(post.blog_id, second.to_string());
    assert_eq!(post.blog_name, "Second");
    assert_eq!(post.title, "Hello again");
}

#[tokio::test]
async fn test_blog_rename_reaches_its_posts() {
    let app = App::new();
    let blog_id = app.blog("Old").await;
    let other = app.blog("Other").await;
    app.post(blog_id, "One").await;
    app.post(blog_id, "Two").await;
    app.post(other, "Three").await;

    app.blogs
        .update_blog(
            blog_id,
            CreateBlogDto {
                name: "New".to_string(),
                description: "Renamed".to_string(),
                website_url: "https://example.com".to_string(),
            },
        )
        .await
        .unwrap();

    let page = app
        .posts_query
        .find_posts_of_blog(blog_id, &PostsQuery::default(), None)
        .await
        .unwrap();
    assert_eq!(page.total_count, 2);
    assert!(page.items.iter().all(|p| p.blog_name == "New"));

    let untouched = app
        .posts_query
        .find_posts_of_blog(other, &PostsQuery::default(), None)
        .await
        .unwrap();
    assert_eq!(untouched.items[0].blog_name, "Other");
}

#[tokio::test]
async fn test_posts_of_missing_blog_is_not_found() {
    let app = App::new();

    let err = app
        .posts_query
        .find_posts_of_blog(Uuid::new_v4(), &PostsQuery::default(), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::BlogNotFound(_)));
}

#[tokio::test]
async fn test_repeated_like_keeps_one_record() {
    let app = App::new();
    let blog_id = app.blog("Tech").await;
    let post_id = app.post(blog_id, "Hello").await;
    let alice = app.user("alice").await;
    let bob = app.user("bob").await;

    let like = || CreateLikeDto {
        like_status: LikeStatus::Like,
    };
    app.posts.set_like(post_id, alice, like()).await.unwrap();
    app.posts.set_like(post_id, alice, like()).await.unwrap();
    app.posts
        .set_like(
            post_id,
            bob,
            CreateLikeDto {
                like_status: LikeStatus::Dislike,
            },
        )
        .await
        .unwrap();

    let post = app
        .posts_query
        .find_one_post(post_id, Some(alice))
        .await
        .unwrap();
    let likes = post.extended_likes_info;
    assert_eq!(likes.likes_count, 1);
    assert_eq!(likes.dislikes_count, 1);
    assert_eq!(likes.my_status, LikeStatus::Like);
    assert_eq!(likes.newest_likes.len(), 1);
    assert_eq!(likes.newest_likes[0].login, "alice");

    let anonymous = app.posts_query.find_one_post(post_id, None).await.unwrap();
    assert_eq!(anonymous.extended_likes_info.my_status, LikeStatus::None);
}

#[tokio::test]
async fn test_switching_like_moves_counters() {
    let app = App::new();
    let blog_id = app.blog("Tech").await;
    let post_id = app.post(blog_id, "Hello").await;
    let alice = app.user("alice").await;

    for status in [LikeStatus::Like, LikeStatus::Dislike, LikeStatus::None] {
        app.posts
            .set_like(post_id, alice, CreateLikeDto { like_status: status })
            .await
            .unwrap();
    }

    let post = app.posts_query.find_one_post(post_id, Some(alice)).await.unwrap();
    assert_eq!(post.extended_likes_info.likes_count, 0);
    assert_eq!(post.extended_likes_info.dislikes_count, 0);
    assert_eq!(post.extended_likes_info.my_status, LikeStatus::None);
}

#[tokio::test]
async fn test_blog_search_is_case_insensitive() {
    let app = App::new();
    app.blog("Tech").await;
    app.blog("MyTECHblog").await;
    app.blog("Cooking").await;

    let page = app
        .blogs_query
        .find_all_blogs(&BlogsQuery {
            search_name_term: Some("tech".to_string()),
            page_size: Some(1),
            sort_by: Some("name".to_string()),
            sort_direction: Some(SortDirection::Asc),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total_count, 2);
    assert_eq!(page.pages_count, 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "MyTECHblog");
}

#[tokio::test]
async fn test_removed_post_is_gone() {
    let app = App::new();
    let blog_id = app.blog("Tech").await;
    let post_id = app.post(blog_id, "Hello").await;

    app.posts.remove_post(post_id).await.unwrap();

    let err = app.posts_query.find_one_post(post_id, None).await.unwrap_err();
    assert!(matches!(err, DomainError::PostNotFound(_)));
    assert!(matches!(
        app.posts.remove_post(post_id).await,
        Err(DomainError::PostNotFound(_))
    ));
}

#[tokio::test]
async fn test_only_commentator_may_edit_comment() {
    let app = App::new();
    let blog_id = app.blog("Tech").await;
    let post_id = app.post(blog_id, "Hello").await;
    let alice = app.user("alice").await;
    let bob = app.user("bob").await;

    let comment_id = app
        .comments
        .create_comment(post_id, alice, comment_dto("A comment long enough to pass"))
        .await
        .unwrap();

    let err = app
        .comments
        .update_comment(comment_id, bob, comment_dto("Hijacked content that is long"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden));
    assert!(matches!(
        app.comments.remove_comment(comment_id, bob).await,
        Err(DomainError::Forbidden)
    ));

    app.comments
        .update_comment(comment_id, alice, comment_dto("Edited by the commentator"))
        .await
        .unwrap();

    let page = app
        .comments_query
        .find_comments_of_post(post_id, &CommentsQuery::default(), Some(bob))
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].content, "Edited by the commentator");
    assert_eq!(page.items[0].commentator_info.user_login, "alice");
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    let app = App::new();
    let alice = app.user("alice").await;

    let err = app
        .comments
        .create_comment(Uuid::new_v4(), alice, comment_dto("A comment long enough to pass"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::PostNotFound(_)));
}

#[tokio::test]
async fn test_duplicate_login_is_rejected() {
    let app = App::new();
    app.user("alice").await;

    let err = app
        .users
        .create_user(CreateUserDto {
            login: "alice".to_string(),
            password: "qwerty1".to_string(),
            email: "other@example.com".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(ref fields) if fields[0].field == "login"));
}

#[tokio::test]
async fn test_login_and_me() {
    let app = App::new();
    let alice = app.user("alice").await;

    let wrong = app
        .auth
        .login(LoginDto {
            login_or_email: "alice".to_string(),
            password: "nope123".to_string(),
        })
        .await;
    assert!(matches!(wrong, Err(DomainError::Unauthorized)));

    let auth = app
        .auth
        .login(LoginDto {
            login_or_email: "alice@example.com".to_string(),
            password: "qwerty1".to_string(),
        })
        .await
        .unwrap();
    assert!(!auth.access_token.is_empty());

    let me = app.auth.me(alice).await.unwrap();
    assert_eq!(me.login, "alice");
    assert_eq!(me.user_id, alice.to_string());
}

#[tokio::test]
async fn test_password_recovery_flow() {
    let app = App::new();
    app.user("alice").await;

    let unknown = app
        .auth
        .password_recovery(PasswordRecoveryDto {
            email: "ghost@example.com".to_string(),
        })
        .await
        .unwrap();
    assert!(unknown.is_none());

    let code = app
        .auth
        .password_recovery(PasswordRecoveryDto {
            email: "alice@example.com".to_string(),
        })
        .await
        .unwrap()
        .unwrap();

    app.auth
        .new_password(NewPasswordDto {
            new_password: "changed1".to_string(),
            recovery_code: code.expose().to_string(),
        })
        .await
        .unwrap();

    let auth = app
        .auth
        .login(LoginDto {
            login_or_email: "alice".to_string(),
            password: "changed1".to_string(),
        })
        .await;
    assert!(auth.is_ok());
}

#[tokio::test]
async fn test_bad_recovery_code_is_bad_request() {
    let app = App::new();

    let err = app
        .auth
        .new_password(NewPasswordDto {
            new_password: "changed1".to_string(),
            recovery_code: "garbage".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::BadRequest { ref field, .. } if field == "recoveryCode"));
}

#[tokio::test]
async fn test_recovery_code_for_removed_user() {
    let app = App::new();
    let alice = app.user("alice").await;
    let code = app
        .auth
        .password_recovery(PasswordRecoveryDto {
            email: "alice@example.com".to_string(),
        })
        .await
        .unwrap()
        .unwrap();

    app.users.remove_user(alice).await.unwrap();

    let err = app.auth.verify_recovery_code(code.expose()).await.unwrap_err();
    assert!(matches!(err, DomainError::BadRequest { ref field, .. } if field == "email"));
    assert!(app.repos.users.find_by_id(alice).await.unwrap().is_none());
}

#[tokio::test]
async fn test_recovery_code_works_once() {
    let app = App::new();
    app.user("alice").await;
    let code = app
        .auth
        .password_recovery(PasswordRecoveryDto {
            email: "alice@example.com".to_string(),
        })
        .await
        .unwrap()
        .unwrap();

    let reset = |password: &str| NewPasswordDto {
        new_password: password.to_string(),
        recovery_code: code.expose().to_string(),
    };
    app.auth.new_password(reset("changed1")).await.unwrap();

    let err = app.auth.new_password(reset("changed2")).await.unwrap_err();
    assert!(matches!(err, DomainError::BadRequest { ref field, .. } if field == "recoveryCode"));

    let auth = app
        .auth
        .login(LoginDto {
            login_or_email: "alice".to_string(),
            password: "changed1".to_string(),
        })
        .await;
    assert!(auth.is_ok());
}

#[tokio::test]
async fn test_recovery_code_is_not_formatted() {
    let app = App::new();
    app.user("alice").await;
    let code = app
        .auth
        .password_recovery(PasswordRecoveryDto {
            email: "alice@example.com".to_string(),
        })
        .await
        .unwrap()
        .unwrap();

    let printed = format!("{code:?} {:?}", Some(&code));
    assert!(!printed.contains(code.expose()));
    assert!(printed.contains("redacted"));
}
