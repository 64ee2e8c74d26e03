#[cfg(test)]
mod tests {
    use quill_core::domain::Post;
    use quill_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, MockDatabase};

    use crate::database::entity::post;
    use crate::database::sqlite_repo::SqlitePostRepository;

    fn model(id: i32, title: &str) -> post::Model {
        post::Model {
            id,
            title: title.to_owned(),
            subtitle: "sub".to_owned(),
            date: "April 05, 2024".to_owned(),
            body: "<p>body</p>".to_owned(),
            author: "A".to_owned(),
            img_url: "https://x/y.png".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results(vec![vec![model(7, "Test Post")]])
            .into_connection();

        let repo = SqlitePostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(7).await.unwrap();

        assert!(result.is_some());
        let post = result.unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "Test Post");
    }

    #[tokio::test]
    async fn test_find_by_id_misses_cleanly() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = SqlitePostRepository::new(db);

        let result = repo.find_by_id(404).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_all_preserves_row_order() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results(vec![vec![model(1, "First"), model(2, "Second")]])
            .into_connection();

        let repo = SqlitePostRepository::new(db);

        let posts = repo.find_all().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "First");
        assert_eq!(posts[1].title, "Second");
    }
}
