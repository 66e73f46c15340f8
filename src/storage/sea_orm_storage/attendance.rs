//! 考勤存储操作

use super::{SeaOrmStorage, db_error};
use crate::entity::attendance::{ActiveModel, Column, Entity as AttendanceEntity};
use crate::errors::Result;
use crate::models::attendance::entities::Attendance;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 保存考勤，(class_id, date) 唯一
    pub async fn create_attendance_impl(&self, attendance: Attendance) -> Result<Attendance> {
        let model = ActiveModel {
            id: Set(attendance.id),
            class_id: Set(attendance.class_id),
            date: Set(attendance.date),
            entries: Set(serde_json::to_string(&attendance.attendance)?),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_error("保存考勤失败"))?;

        result.into_attendance()
    }

    pub async fn list_attendance_by_date_impl(
        &self,
        class_id: &str,
        date: &str,
    ) -> Result<Vec<Attendance>> {
        let result = AttendanceEntity::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::Date.eq(date))
            .all(&self.db)
            .await
            .map_err(db_error("查询考勤失败"))?;

        result.into_iter().map(|m| m.into_attendance()).collect()
    }

    /// 日期为定长 YYYY-MM-DD 字符串，字典序即时间序
    pub async fn list_attendance_in_range_impl(
        &self,
        class_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> Result<Vec<Attendance>> {
        let result = AttendanceEntity::find()
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::Date.gte(start_date))
            .filter(Column::Date.lte(end_date))
            .order_by_asc(Column::Date)
            .all(&self.db)
            .await
            .map_err(db_error("查询考勤失败"))?;

        result.into_iter().map(|m| m.into_attendance()).collect()
    }

    pub async fn delete_attendance_by_class_impl(&self, class_id: &str) -> Result<u64> {
        let result = AttendanceEntity::delete_many()
            .filter(Column::ClassId.eq(class_id))
            .exec(&self.db)
            .await
            .map_err(db_error("删除班级考勤失败"))?;

        Ok(result.rows_affected)
    }
}
