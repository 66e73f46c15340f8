use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    // 为空表示仅通过 Google 登录的账号
                    .col(ColumnDef::new(Users::PasswordHash).string().null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::Role).string().not_null())
                    .col(ColumnDef::new(Users::Section).string().null())
                    .col(ColumnDef::new(Users::RollNumber).integer().null())
                    .to_owned(),
            )
            .await?;

        // 创建班级表
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classes::ClassId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Classes::ClassCode)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Classes::SubjectCode).string().not_null())
                    .col(ColumnDef::new(Classes::Section).string().not_null())
                    .col(ColumnDef::new(Classes::Subject).string().not_null())
                    .col(ColumnDef::new(Classes::TeacherName).string().not_null())
                    .col(ColumnDef::new(Classes::UserId).string().not_null())
                    .col(ColumnDef::new(Classes::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建班级成员表
        manager
            .create_table(
                Table::create()
                    .table(ClassMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassMembers::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClassMembers::ClassId).string().not_null())
                    .col(ColumnDef::new(ClassMembers::UserId).string().not_null())
                    .col(
                        ColumnDef::new(ClassMembers::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Homework::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Homework::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Homework::ClassId).string().not_null())
                    .col(ColumnDef::new(Homework::Title).string().not_null())
                    .col(ColumnDef::new(Homework::Description).text().not_null())
                    .col(
                        ColumnDef::new(Homework::AssignedDate)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Homework::DueDate).big_integer().not_null())
                    .col(ColumnDef::new(Homework::CreatedBy).string().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建作业提交表
        manager
            .create_table(
                Table::create()
                    .table(HomeworkSubmissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HomeworkSubmissions::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HomeworkSubmissions::HomeworkId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HomeworkSubmissions::ClassId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HomeworkSubmissions::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HomeworkSubmissions::DriveLink)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HomeworkSubmissions::SubmittedOn)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HomeworkSubmissions::Status)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建考勤表
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attendance::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attendance::ClassId).string().not_null())
                    .col(ColumnDef::new(Attendance::Date).string().not_null())
                    // 有序的 [{userId, present}] JSON 数组
                    .col(ColumnDef::new(Attendance::Entries).text().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建公告表
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Announcements::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Announcements::ClassId).string().not_null())
                    .col(ColumnDef::new(Announcements::Title).string().not_null())
                    .col(
                        ColumnDef::new(Announcements::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Announcements::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Announcements::CreatedBy)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建密码重置令牌表
        manager
            .create_table(
                Table::create()
                    .table(PasswordResetTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PasswordResetTokens::Token)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PasswordResetTokens::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(PasswordResetTokens::ExpiryDate)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 索引 ====================

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classes_user_id")
                    .table(Classes::Table)
                    .col(Classes::UserId)
                    .to_owned(),
            )
            .await?;

        // 每个 (班级, 用户) 最多一条成员记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_class_members_class_user")
                    .table(ClassMembers::Table)
                    .col(ClassMembers::ClassId)
                    .col(ClassMembers::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_class_members_user_id")
                    .table(ClassMembers::Table)
                    .col(ClassMembers::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_homework_class_id")
                    .table(Homework::Table)
                    .col(Homework::ClassId)
                    .to_owned(),
            )
            .await?;

        // 每个 (作业, 用户) 最多一份提交
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_homework_submissions_homework_user")
                    .table(HomeworkSubmissions::Table)
                    .col(HomeworkSubmissions::HomeworkId)
                    .col(HomeworkSubmissions::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_homework_submissions_class_user")
                    .table(HomeworkSubmissions::Table)
                    .col(HomeworkSubmissions::ClassId)
                    .col(HomeworkSubmissions::UserId)
                    .to_owned(),
            )
            .await?;

        // 每个 (班级, 日期) 最多一条考勤
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_attendance_class_date")
                    .table(Attendance::Table)
                    .col(Attendance::ClassId)
                    .col(Attendance::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_announcements_class_id")
                    .table(Announcements::Table)
                    .col(Announcements::ClassId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(PasswordResetTokens::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HomeworkSubmissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Homework::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    Role,
    Section,
    RollNumber,
}

#[derive(DeriveIden)]
enum Classes {
    #[sea_orm(iden = "classes")]
    Table,
    ClassId,
    ClassCode,
    SubjectCode,
    Section,
    Subject,
    TeacherName,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ClassMembers {
    #[sea_orm(iden = "class_members")]
    Table,
    Id,
    ClassId,
    UserId,
    JoinedAt,
}

#[derive(DeriveIden)]
enum Homework {
    #[sea_orm(iden = "homework")]
    Table,
    Id,
    ClassId,
    Title,
    Description,
    AssignedDate,
    DueDate,
    CreatedBy,
}

#[derive(DeriveIden)]
enum HomeworkSubmissions {
    #[sea_orm(iden = "homework_submissions")]
    Table,
    Id,
    HomeworkId,
    ClassId,
    UserId,
    DriveLink,
    SubmittedOn,
    Status,
}

#[derive(DeriveIden)]
enum Attendance {
    #[sea_orm(iden = "attendance")]
    Table,
    Id,
    ClassId,
    Date,
    Entries,
}

#[derive(DeriveIden)]
enum Announcements {
    #[sea_orm(iden = "announcements")]
    Table,
    Id,
    ClassId,
    Title,
    Description,
    CreatedAt,
    CreatedBy,
}

#[derive(DeriveIden)]
enum PasswordResetTokens {
    #[sea_orm(iden = "password_reset_tokens")]
    Table,
    Token,
    Email,
    ExpiryDate,
}
